//! Market-condition checks run before every rebalance.

use utils::{MAX_TICK, MIN_TICK};

use crate::error::{StrategyError, StrategyResult};

/// Ensures orders `max_threshold + tick_spacing` ticks away from `mid` on
/// either side stay inside the tick range.
pub fn check_price_bounds(mid: i32, max_threshold: i32, tick_spacing: i32) -> StrategyResult<()> {
    if mid <= MIN_TICK + max_threshold + tick_spacing {
        return Err(StrategyError::PriceTooLow { mid });
    }
    if mid >= MAX_TICK - max_threshold - tick_spacing {
        return Err(StrategyError::PriceTooHigh { mid });
    }
    Ok(())
}

/// Rejects a mid tick further than `max_deviation` from the TWAP. The bound is
/// inclusive.
pub fn check_twap_deviation(mid: i32, twap: i32, max_deviation: i32) -> StrategyResult<()> {
    let deviation = (i64::from(mid) - i64::from(twap)).abs();
    if deviation > i64::from(max_deviation) {
        return Err(StrategyError::TwapDeviationExceeded {
            deviation,
            max: max_deviation,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_too_low_edge() {
        assert!(matches!(
            check_price_bounds(MIN_TICK + 160, 100, 60),
            Err(StrategyError::PriceTooLow { .. })
        ));
        assert!(check_price_bounds(MIN_TICK + 161, 100, 60).is_ok());
    }

    #[test]
    fn test_price_too_high_edge() {
        assert!(matches!(
            check_price_bounds(MAX_TICK - 160, 100, 60),
            Err(StrategyError::PriceTooHigh { .. })
        ));
        assert!(check_price_bounds(MAX_TICK - 161, 100, 60).is_ok());
    }

    #[test]
    fn test_deviation_bound_is_inclusive() {
        assert!(check_twap_deviation(300, 200, 100).is_ok());
        assert!(check_twap_deviation(100, 200, 100).is_ok());
        assert!(matches!(
            check_twap_deviation(301, 200, 100),
            Err(StrategyError::TwapDeviationExceeded { deviation: 101, max: 100 })
        ));
        assert!(matches!(
            check_twap_deviation(99, 200, 100),
            Err(StrategyError::TwapDeviationExceeded { deviation: 101, .. })
        ));
    }

    #[test]
    fn test_zero_deviation_cap_requires_exact_twap() {
        assert!(check_twap_deviation(-42, -42, 0).is_ok());
        assert!(check_twap_deviation(-42, -43, 0).is_err());
    }

    #[test]
    fn test_deviation_does_not_overflow_at_range_edges() {
        assert!(matches!(
            check_twap_deviation(MAX_TICK, MIN_TICK, i32::MAX),
            Ok(())
        ));
        assert!(check_twap_deviation(i32::MAX, i32::MIN, 0).is_err());
    }
}
