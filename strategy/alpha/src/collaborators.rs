//! Interfaces of the pool and vault the strategy drives, and their
//! implementations for the on-chain clients.

use alloy::primitives::Address;
use anyhow::Result;
use async_trait::async_trait;

use clients_alphavault::AlphaVault;
use clients_uniswapv3::UniswapV3Pool;

use crate::types::Boundaries;

/// Price source: live tick, tick spacing and oracle cumulatives.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Pool: Send + Sync {
    /// Current mid tick.
    async fn current_tick(&self) -> Result<i32>;

    /// Tick spacing; every boundary must be a multiple of it.
    async fn tick_spacing(&self) -> Result<i32>;

    /// Tick cumulatives at each of `seconds_agos`, in request order.
    async fn observe(&self, seconds_agos: [u32; 2]) -> Result<[i64; 2]>;
}

/// Holder of the positions, and source of truth for governance.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Vault: Send + Sync {
    /// Moves the base and limit positions to `boundaries`.
    async fn rebalance(&self, boundaries: &Boundaries) -> Result<()>;

    /// Whether `who` may change strategy parameters.
    async fn is_governance(&self, who: Address) -> Result<bool>;
}

#[async_trait]
impl Pool for UniswapV3Pool {
    async fn current_tick(&self) -> Result<i32> {
        UniswapV3Pool::current_tick(self).await
    }

    async fn tick_spacing(&self) -> Result<i32> {
        UniswapV3Pool::tick_spacing(self).await
    }

    async fn observe(&self, seconds_agos: [u32; 2]) -> Result<[i64; 2]> {
        UniswapV3Pool::observe(self, seconds_agos).await
    }
}

#[async_trait]
impl Vault for AlphaVault {
    async fn rebalance(&self, boundaries: &Boundaries) -> Result<()> {
        AlphaVault::rebalance(self, boundaries.to_ticks()).await
    }

    async fn is_governance(&self, who: Address) -> Result<bool> {
        Ok(self.governance().await? == who)
    }
}
