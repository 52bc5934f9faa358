//! Alpha status: print the pool tick, TWAP and the rebalance the strategy
//! would perform right now, without sending anything.
//!
//! Usage: alpha-status <config_path> [caller_address]
//!
//! Reads the same JSON config file as `alpha-keeper`.

use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alpha::{AlphaStrategy, AlphaStrategyConfig};
use anyhow::{Context, Result};
use clients_alphavault::{AlphaVault, AlphaVaultConfig};
use clients_uniswapv3::{UniswapV3Pool, UniswapV3PoolConfig};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Deserialize)]
struct StatusConfig {
    rpc_url: Url,
    pool: UniswapV3PoolConfig,
    vault: AlphaVaultConfig,
    strategy: AlphaStrategyConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <config_path> [caller_address]",
            args.first().map(|s| s.as_str()).unwrap_or("alpha-status")
        );
        std::process::exit(1);
    }

    let raw = std::fs::read_to_string(args[1].trim())
        .with_context(|| format!("failed to read config {}", args[1]))?;
    let config: StatusConfig = serde_json::from_str(&raw).context("invalid config")?;
    let caller = match args.get(2) {
        Some(arg) => Address::from_str(arg.trim())?,
        None => config.strategy.keeper.unwrap_or(Address::ZERO),
    };

    let provider = Arc::new(ProviderBuilder::new().connect_http(config.rpc_url).erased());
    let pool = UniswapV3Pool::new(config.pool, Arc::clone(&provider));
    let vault = AlphaVault::new(config.vault, provider);
    let governance = vault.governance().await?;

    let strategy = AlphaStrategy::new(config.strategy, pool, vault).await?;

    println!("Pool: {} | Vault: {}", strategy.pool().address(), strategy.vault().address());
    println!("Governance: {}", governance);
    println!("Caller: {}", caller);
    println!("Current tick: {}", strategy.last_mid());
    println!("TWAP: {}", strategy.get_twap().await?);
    println!("Config:");
    println!("{}", serde_json::to_string_pretty(&strategy.config())?);
    println!("---");
    match strategy.check_rebalance(caller).await {
        Ok(plan) => {
            println!("Rebalance would succeed:");
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Err(e) => println!("Rebalance would fail: {}", e),
    }

    Ok(())
}
