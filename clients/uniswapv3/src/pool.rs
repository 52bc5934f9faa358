//! Uniswap V3 pool client: live tick, tick spacing and oracle observations.

use alloy::primitives::Address;
use alloy::providers::DynProvider;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tracing::debug;

use crate::config::UniswapV3PoolConfig;
use crate::contracts::IUniswapV3Pool;

/// UniswapV3Pool reads price state from a Uniswap V3 pool contract
pub struct UniswapV3Pool {
    /// Pool contract instance for making RPC calls
    pool: IUniswapV3Pool::IUniswapV3PoolInstance<Arc<DynProvider>>,
}

impl UniswapV3Pool {
    /// Creates a new `UniswapV3Pool` instance
    ///
    /// # Arguments
    /// * `config` - A `UniswapV3PoolConfig` instance containing the pool address
    /// * `provider` - Provider used for all RPC calls
    pub fn new(config: UniswapV3PoolConfig, provider: Arc<DynProvider>) -> Self {
        Self {
            pool: IUniswapV3Pool::new(config.address, provider),
        }
    }

    /// Address of the pool contract.
    pub fn address(&self) -> Address {
        *self.pool.address()
    }

    /// Reads the current tick from `slot0`.
    pub async fn current_tick(&self) -> Result<i32> {
        let slot0 = self.pool.slot0().call().await?;
        utils::tick_from_i24(slot0.tick)
    }

    /// Reads the immutable tick spacing of the pool.
    pub async fn tick_spacing(&self) -> Result<i32> {
        let spacing = self.pool.tickSpacing().call().await?;
        utils::tick_from_i24(spacing)
    }

    /// Reads tick cumulatives for each entry of `seconds_agos`.
    ///
    /// # Returns
    /// The cumulatives in the same order as the request.
    pub async fn observe(&self, seconds_agos: [u32; 2]) -> Result<[i64; 2]> {
        let observed = self.pool.observe(seconds_agos.to_vec()).call().await?;
        debug!(
            pool = %self.address(),
            ?seconds_agos,
            cumulatives = ?observed.tickCumulatives,
            "observed tick cumulatives"
        );

        match observed.tickCumulatives.as_slice() {
            [older, newer] => Ok([
                utils::cumulative_from_i56(*older)?,
                utils::cumulative_from_i56(*newer)?,
            ]),
            other => Err(anyhow!(
                "pool returned {} tick cumulatives, expected 2",
                other.len()
            )),
        }
    }
}
