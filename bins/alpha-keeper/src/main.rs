//! Alpha keeper: rebalance the vault every `interval_secs` seconds.
//!
//! Usage: alpha-keeper <config_path>
//!
//! The config file is JSON:
//!
//! ```json
//! {
//!   "rpc_url": "https://...",
//!   "pool": { "address": "0x..." },
//!   "vault": { "address": "0x..." },
//!   "interval_secs": 3600,
//!   "strategy": {
//!     "base_threshold": 3600,
//!     "limit_threshold": 1200,
//!     "max_twap_deviation": 100,
//!     "twap_duration": 60,
//!     "keeper": "0x..."
//!   }
//! }
//! ```
//!
//! The signing key is read from `KEEPER_PRIVATE_KEY`.

use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alpha::{AlphaStrategy, AlphaStrategyConfig, StrategyError};
use anyhow::{bail, Context, Result};
use clients_alphavault::{AlphaVault, AlphaVaultConfig};
use clients_uniswapv3::{UniswapV3Pool, UniswapV3PoolConfig};
use serde::Deserialize;
use std::sync::Arc;
use tokio::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Deserialize)]
struct KeeperConfig {
    rpc_url: Url,
    pool: UniswapV3PoolConfig,
    vault: AlphaVaultConfig,
    interval_secs: u64,
    strategy: AlphaStrategyConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <config_path>",
            args.first().map(|s| s.as_str()).unwrap_or("alpha-keeper")
        );
        std::process::exit(1);
    }

    let raw = std::fs::read_to_string(args[1].trim())
        .with_context(|| format!("failed to read config {}", args[1]))?;
    let config: KeeperConfig = serde_json::from_str(&raw).context("invalid keeper config")?;
    if config.interval_secs == 0 {
        bail!("interval_secs must be positive");
    }

    let signer: PrivateKeySigner = std::env::var("KEEPER_PRIVATE_KEY")
        .context("KEEPER_PRIVATE_KEY is not set")?
        .trim()
        .parse()
        .context("invalid KEEPER_PRIVATE_KEY")?;
    let caller = signer.address();

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(config.rpc_url.clone())
        .erased();
    let provider = Arc::new(provider);

    let vault = AlphaVault::new(config.vault.clone(), Arc::clone(&provider));
    let vault_pool = vault.pool().await?;
    if vault_pool != config.pool.address {
        bail!(
            "vault {} provides liquidity to pool {}, not {}",
            vault.address(),
            vault_pool,
            config.pool.address
        );
    }
    let pool = UniswapV3Pool::new(config.pool.clone(), Arc::clone(&provider));

    let strategy = AlphaStrategy::new(config.strategy, pool, vault).await?;
    info!(
        %caller,
        pool = %config.pool.address,
        vault = %config.vault.address,
        config = ?strategy.config(),
        "keeper started"
    );

    let mut interval = tokio::time::interval(Duration::from_secs(config.interval_secs));
    loop {
        interval.tick().await;
        match strategy.rebalance(caller).await {
            Ok(plan) => info!(mid = plan.mid, twap = plan.twap, "rebalance sent"),
            Err(e @ StrategyError::Collaborator(_)) => error!(error = %e, "rebalance failed"),
            Err(e) => warn!(error = %e, "rebalance skipped"),
        }
    }
}
