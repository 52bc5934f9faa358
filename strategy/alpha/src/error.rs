//! Error types for the alpha strategy.

use thiserror::Error;

/// Alpha strategy result
pub type StrategyResult<T> = Result<T, StrategyError>;

/// Reasons a threshold value is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThresholdError {
    /// Threshold is zero or negative
    #[error("threshold must be positive")]
    NotPositive,
    /// Threshold is at or beyond the maximum tick
    #[error("threshold must be below the maximum tick")]
    TooHigh,
    /// Threshold is not aligned to the pool's tick spacing
    #[error("threshold must be a multiple of the tick spacing")]
    NotSpacingMultiple,
}

/// Alpha strategy errors
///
/// Every variant aborts the whole invocation; nothing is committed.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Caller is not the configured keeper
    #[error("caller is not the keeper")]
    Unauthorized,
    /// Caller is not the vault's governance
    #[error("caller is not governance")]
    NotGovernance,
    /// Rejected base or limit threshold
    #[error("invalid threshold: {0}")]
    Threshold(#[from] ThresholdError),
    /// Deviation cap, TWAP duration or tick spacing out of range
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// Mid tick too close to `MIN_TICK` to place orders below it
    #[error("price too low: mid tick {mid}")]
    PriceTooLow { mid: i32 },
    /// Mid tick too close to `MAX_TICK` to place orders above it
    #[error("price too high: mid tick {mid}")]
    PriceTooHigh { mid: i32 },
    /// Mid tick strays too far from the TWAP
    #[error("twap deviation {deviation} exceeds maximum {max}")]
    TwapDeviationExceeded { deviation: i64, max: i32 },
    /// A rebalance is already running
    #[error("rebalance already in progress")]
    Locked,
    /// Pool or vault reported a failure
    #[error("collaborator failure: {0:#}")]
    Collaborator(#[from] anyhow::Error),
}
