//! Integer tick-space helpers.
//!
//! Ticks are the discrete price units of a Uniswap V3 style pool: price at tick
//! `i` is `1.0001^i`. Every order boundary placed by the strategy must be a
//! multiple of the pool's tick spacing and lie inside `[MIN_TICK, MAX_TICK]`.

/// Minimum tick of the price space (price ≈ 2.94e-39).
pub const MIN_TICK: i32 = -887272;

/// Maximum tick of the price space (price ≈ 3.40e+38).
pub const MAX_TICK: i32 = 887272;

/// Rounds `tick` down to the nearest multiple of `spacing`.
///
/// Rounds toward negative infinity, so `floor_to_spacing(-5, 60) == -60`.
/// `spacing` must be positive.
pub fn floor_to_spacing(tick: i32, spacing: i32) -> i32 {
    let mut compressed = tick / spacing;
    if tick < 0 && tick % spacing != 0 {
        compressed -= 1;
    }
    compressed * spacing
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_floor_rounds_toward_negative_infinity() {
        assert_eq!(floor_to_spacing(-5, 60), -60);
        assert_eq!(floor_to_spacing(-60, 60), -60);
        assert_eq!(floor_to_spacing(-61, 60), -120);
        assert_eq!(floor_to_spacing(0, 60), 0);
        assert_eq!(floor_to_spacing(65, 60), 60);
        assert_eq!(floor_to_spacing(60, 60), 60);
        assert_eq!(floor_to_spacing(59, 60), 0);
    }

    #[test]
    fn test_floor_with_unit_spacing_is_identity() {
        for tick in [MIN_TICK, -7, 0, 7, MAX_TICK] {
            assert_eq!(floor_to_spacing(tick, 1), tick);
        }
    }

    proptest! {
        #[test]
        fn test_floor_is_idempotent(tick in MIN_TICK..=MAX_TICK, spacing in 1i32..=16384) {
            let floored = floor_to_spacing(tick, spacing);
            prop_assert_eq!(floor_to_spacing(floored, spacing), floored);
        }

        #[test]
        fn test_floor_is_largest_multiple_below(tick in MIN_TICK..=MAX_TICK, spacing in 1i32..=16384) {
            let floored = floor_to_spacing(tick, spacing);
            prop_assert_eq!(floored % spacing, 0);
            prop_assert!(floored <= tick);
            prop_assert!(tick - floored < spacing);
        }
    }
}
