//! Strategy parameters
//!
//! `ParameterStore` owns the mutable configuration. Every setter validates its
//! input before writing, so the invariants below hold after each mutation:
//!
//! - `0 < base_threshold < MAX_TICK`, `base_threshold % tick_spacing == 0`
//! - `0 < limit_threshold < MAX_TICK`, `limit_threshold % tick_spacing == 0`
//! - `max_twap_deviation >= 0`
//! - `twap_duration > 0`
//!
//! Authorization is not checked here; callers gate the setters.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::{StrategyError, StrategyResult};
use crate::threshold::validate_threshold;

/// Snapshot of the strategy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Pool tick spacing, fixed at construction
    pub tick_spacing: i32,
    /// Half-width in ticks of the base order
    pub base_threshold: i32,
    /// Width in ticks of each limit-order leg
    pub limit_threshold: i32,
    /// Largest tolerated distance between mid and TWAP
    pub max_twap_deviation: i32,
    /// TWAP window in seconds
    pub twap_duration: u32,
    /// Only address allowed to rebalance, if set
    pub keeper: Option<Address>,
    /// Mid tick at construction or at the last successful rebalance
    pub last_mid: i32,
}

impl StrategyConfig {
    /// The wider of the two thresholds.
    pub fn max_threshold(&self) -> i32 {
        self.base_threshold.max(self.limit_threshold)
    }

    /// Checks every invariant of the configuration.
    pub fn validate(&self) -> StrategyResult<()> {
        if self.tick_spacing <= 0 {
            return Err(StrategyError::InvalidParameter("tick spacing must be positive"));
        }
        validate_threshold(self.base_threshold, self.tick_spacing)?;
        validate_threshold(self.limit_threshold, self.tick_spacing)?;
        check_max_twap_deviation(self.max_twap_deviation)?;
        check_twap_duration(self.twap_duration)?;
        Ok(())
    }
}

fn check_max_twap_deviation(value: i32) -> StrategyResult<()> {
    if value < 0 {
        return Err(StrategyError::InvalidParameter(
            "max twap deviation must not be negative",
        ));
    }
    Ok(())
}

fn check_twap_duration(value: u32) -> StrategyResult<()> {
    if value == 0 {
        return Err(StrategyError::InvalidParameter("twap duration must be positive"));
    }
    Ok(())
}

/// Validated, single-field-atomic store for `StrategyConfig`.
///
/// The lock is only held for the duration of a read or write, never across
/// an await point.
#[derive(Debug)]
pub struct ParameterStore {
    config: RwLock<StrategyConfig>,
}

impl ParameterStore {
    /// Creates a store after checking every invariant of `config`.
    pub fn new(config: StrategyConfig) -> StrategyResult<Self> {
        config.validate()?;
        Ok(Self {
            config: RwLock::new(config),
        })
    }

    /// Returns a copy of the committed configuration.
    pub fn snapshot(&self) -> StrategyConfig {
        self.read().clone()
    }

    /// Replaces the keeper, returning the previous one.
    pub fn set_keeper(&self, keeper: Option<Address>) -> Option<Address> {
        std::mem::replace(&mut self.write().keeper, keeper)
    }

    /// Replaces the base threshold, returning the previous one.
    pub fn set_base_threshold(&self, threshold: i32) -> StrategyResult<i32> {
        let mut config = self.write();
        validate_threshold(threshold, config.tick_spacing)?;
        Ok(std::mem::replace(&mut config.base_threshold, threshold))
    }

    /// Replaces the limit threshold, returning the previous one.
    pub fn set_limit_threshold(&self, threshold: i32) -> StrategyResult<i32> {
        let mut config = self.write();
        validate_threshold(threshold, config.tick_spacing)?;
        Ok(std::mem::replace(&mut config.limit_threshold, threshold))
    }

    /// Replaces the TWAP deviation cap, returning the previous one.
    pub fn set_max_twap_deviation(&self, max_twap_deviation: i32) -> StrategyResult<i32> {
        check_max_twap_deviation(max_twap_deviation)?;
        Ok(std::mem::replace(
            &mut self.write().max_twap_deviation,
            max_twap_deviation,
        ))
    }

    /// Replaces the TWAP window, returning the previous one.
    pub fn set_twap_duration(&self, twap_duration: u32) -> StrategyResult<u32> {
        check_twap_duration(twap_duration)?;
        Ok(std::mem::replace(&mut self.write().twap_duration, twap_duration))
    }

    /// Records the mid tick of a completed rebalance.
    pub(crate) fn commit_last_mid(&self, mid: i32) {
        self.write().last_mid = mid;
    }

    fn read(&self) -> RwLockReadGuard<'_, StrategyConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StrategyConfig> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThresholdError;

    fn config() -> StrategyConfig {
        StrategyConfig {
            tick_spacing: 60,
            base_threshold: 1200,
            limit_threshold: 600,
            max_twap_deviation: 100,
            twap_duration: 3600,
            keeper: None,
            last_mid: 205,
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut bad = config();
        bad.base_threshold = 1201;
        assert!(matches!(
            ParameterStore::new(bad),
            Err(StrategyError::Threshold(ThresholdError::NotSpacingMultiple))
        ));

        let mut bad = config();
        bad.limit_threshold = 0;
        assert!(matches!(
            ParameterStore::new(bad),
            Err(StrategyError::Threshold(ThresholdError::NotPositive))
        ));

        let mut bad = config();
        bad.twap_duration = 0;
        assert!(matches!(
            ParameterStore::new(bad),
            Err(StrategyError::InvalidParameter(_))
        ));

        let mut bad = config();
        bad.tick_spacing = 0;
        assert!(matches!(
            ParameterStore::new(bad),
            Err(StrategyError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_threshold_setters_keep_old_value_on_error() {
        let store = ParameterStore::new(config()).unwrap();

        assert_eq!(store.set_base_threshold(2400).unwrap(), 1200);
        assert_eq!(store.snapshot().base_threshold, 2400);

        assert!(matches!(
            store.set_base_threshold(2401),
            Err(StrategyError::Threshold(ThresholdError::NotSpacingMultiple))
        ));
        assert!(matches!(
            store.set_limit_threshold(utils::MAX_TICK),
            Err(StrategyError::Threshold(ThresholdError::TooHigh))
        ));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.base_threshold, 2400);
        assert_eq!(snapshot.limit_threshold, 600);
    }

    #[test]
    fn test_deviation_and_duration_setters() {
        let store = ParameterStore::new(config()).unwrap();

        assert_eq!(store.set_max_twap_deviation(0).unwrap(), 100);
        assert!(matches!(
            store.set_max_twap_deviation(-1),
            Err(StrategyError::InvalidParameter(_))
        ));
        assert_eq!(store.snapshot().max_twap_deviation, 0);

        assert_eq!(store.set_twap_duration(60).unwrap(), 3600);
        assert!(matches!(
            store.set_twap_duration(0),
            Err(StrategyError::InvalidParameter(_))
        ));
        assert_eq!(store.snapshot().twap_duration, 60);
    }

    #[test]
    fn test_keeper_and_last_mid() {
        let store = ParameterStore::new(config()).unwrap();
        let keeper = Address::repeat_byte(0x11);

        assert_eq!(store.set_keeper(Some(keeper)), None);
        assert_eq!(store.set_keeper(None), Some(keeper));

        store.commit_last_mid(-7);
        assert_eq!(store.snapshot().last_mid, -7);
        assert_eq!(store.snapshot().max_threshold(), 1200);
    }
}
