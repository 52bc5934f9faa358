//! Alpha vault client: governance lookup and the position-moving `rebalance` call.

use alloy::network::ReceiptResponse;
use alloy::primitives::Address;
use alloy::providers::DynProvider;
use anyhow::{bail, Result};
use std::sync::Arc;
use tracing::info;

use crate::config::AlphaVaultConfig;
use crate::contracts::IAlphaVault;

/// AlphaVault talks to the vault contract that owns the liquidity positions
///
/// The provider must carry a wallet for `rebalance` to be sent; read-only
/// providers are enough for `governance` and `pool`.
pub struct AlphaVault {
    /// Vault contract instance for making RPC calls
    vault: IAlphaVault::IAlphaVaultInstance<Arc<DynProvider>>,
}

impl AlphaVault {
    /// Creates a new `AlphaVault` instance
    ///
    /// # Arguments
    /// * `config` - A `AlphaVaultConfig` instance containing the vault address
    /// * `provider` - Provider used for calls and transactions
    pub fn new(config: AlphaVaultConfig, provider: Arc<DynProvider>) -> Self {
        Self {
            vault: IAlphaVault::new(config.address, provider),
        }
    }

    /// Address of the vault contract.
    pub fn address(&self) -> Address {
        *self.vault.address()
    }

    /// Reads the pool the vault provides liquidity to.
    pub async fn pool(&self) -> Result<Address> {
        Ok(self.vault.pool().call().await?)
    }

    /// Reads the current governance address of the vault.
    pub async fn governance(&self) -> Result<Address> {
        Ok(self.vault.governance().call().await?)
    }

    /// Sends the vault `rebalance` transaction and waits for its receipt.
    ///
    /// # Arguments
    /// * `ticks` - `[base_lower, base_upper, limit_lower_lower, limit_lower_upper, limit_upper_lower, limit_upper_upper]`
    ///
    /// # Returns
    /// `Result<()>` - Returns an error if the transaction cannot be sent or reverts
    pub async fn rebalance(&self, ticks: [i32; 6]) -> Result<()> {
        let [base_lower, base_upper, ll_lower, ll_upper, lu_lower, lu_upper] = ticks;
        let receipt = self
            .vault
            .rebalance(
                utils::tick_to_i24(base_lower)?,
                utils::tick_to_i24(base_upper)?,
                utils::tick_to_i24(ll_lower)?,
                utils::tick_to_i24(ll_upper)?,
                utils::tick_to_i24(lu_lower)?,
                utils::tick_to_i24(lu_upper)?,
            )
            .send()
            .await?
            .get_receipt()
            .await?;

        if !receipt.status() {
            bail!(
                "vault rebalance transaction {} reverted",
                receipt.transaction_hash()
            );
        }

        info!(
            vault = %self.address(),
            tx = %receipt.transaction_hash(),
            block = ?receipt.block_number(),
            "vault rebalance confirmed"
        );
        Ok(())
    }
}
