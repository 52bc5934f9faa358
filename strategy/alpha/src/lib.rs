//! Alpha rebalancing strategy crate.
//!
//! Decides when and where to move the base and limit orders of a vault that
//! provides liquidity to a Uniswap V3 pool, guarding against extreme prices
//! and against mid prices that stray from the pool's TWAP.

mod alpha;
pub mod collaborators;
pub mod config;
mod error;
pub mod guards;
mod lock;
pub mod params;
pub mod threshold;
pub mod twap;
mod types;

pub use alpha::AlphaStrategy;
pub use collaborators::{Pool, Vault};
pub use config::AlphaStrategyConfig;
pub use error::{StrategyError, StrategyResult, ThresholdError};
pub use params::StrategyConfig;
pub use types::{Boundaries, RebalancePlan};
