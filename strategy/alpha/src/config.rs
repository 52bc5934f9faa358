//! Configuration types for the alpha strategy.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Initial parameters for AlphaStrategy (clients are passed to `AlphaStrategy::new`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphaStrategyConfig {
    /// Half-width in ticks of the base order, beyond the mid bucket
    pub base_threshold: i32,
    /// Width in ticks of each limit-order leg
    pub limit_threshold: i32,
    /// Largest tolerated distance in ticks between mid and TWAP
    pub max_twap_deviation: i32,
    /// TWAP window in seconds
    pub twap_duration: u32,
    /// Only address allowed to trigger a rebalance; anyone when unset
    #[serde(default)]
    pub keeper: Option<Address>,
}
