//! Shared utilities for the alpha workspace.

use alloy::primitives::aliases::{I24, I56};
use anyhow::{anyhow, Result};

pub mod tick;

pub use tick::{floor_to_spacing, MAX_TICK, MIN_TICK};

/// Converts an on-chain `int24` tick into a native tick.
pub fn tick_from_i24(value: I24) -> Result<i32> {
    i32::try_from(value).map_err(|e| anyhow!("int24 tick {} does not fit i32: {}", value, e))
}

/// Converts a native tick into an on-chain `int24`.
///
/// Fails for values outside the `int24` range rather than wrapping.
pub fn tick_to_i24(tick: i32) -> Result<I24> {
    I24::try_from(tick).map_err(|e| anyhow!("tick {} does not fit int24: {}", tick, e))
}

/// Converts an on-chain `int56` tick cumulative into an `i64`.
pub fn cumulative_from_i56(value: I56) -> Result<i64> {
    i64::try_from(value)
        .map_err(|e| anyhow!("int56 cumulative {} does not fit i64: {}", value, e))
}
