//! Shared types for the alpha strategy.

use serde::{Deserialize, Serialize};

/// Tick boundaries of the base order and both limit-order legs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundaries {
    /// Lower tick of the base order
    pub base_lower: i32,
    /// Upper tick of the base order
    pub base_upper: i32,
    /// Lower tick of the limit leg below the mid
    pub limit_lower_lower: i32,
    /// Upper tick of the limit leg below the mid
    pub limit_lower_upper: i32,
    /// Lower tick of the limit leg above the mid
    pub limit_upper_lower: i32,
    /// Upper tick of the limit leg above the mid
    pub limit_upper_upper: i32,
}

impl Boundaries {
    /// Derives the boundaries around `mid`.
    ///
    /// The base order spans `[floor - base, ceil + base]`; the limit legs sit
    /// directly below `[floor - limit, floor]` and above `[ceil, ceil + limit]`
    /// the spacing-aligned bucket containing `mid`.
    pub fn around(mid: i32, tick_spacing: i32, base_threshold: i32, limit_threshold: i32) -> Self {
        let mid_floor = utils::floor_to_spacing(mid, tick_spacing);
        let mid_ceil = mid_floor + tick_spacing;
        Self {
            base_lower: mid_floor - base_threshold,
            base_upper: mid_ceil + base_threshold,
            limit_lower_lower: mid_floor - limit_threshold,
            limit_lower_upper: mid_floor,
            limit_upper_lower: mid_ceil,
            limit_upper_upper: mid_ceil + limit_threshold,
        }
    }

    /// Boundaries in vault argument order.
    pub fn to_ticks(&self) -> [i32; 6] {
        [
            self.base_lower,
            self.base_upper,
            self.limit_lower_lower,
            self.limit_lower_upper,
            self.limit_upper_lower,
            self.limit_upper_upper,
        ]
    }
}

/// Outcome of the guard checks: what a rebalance does at the current price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebalancePlan {
    /// Mid tick read from the pool
    pub mid: i32,
    /// Average tick over the TWAP window
    pub twap: i32,
    /// Boundaries handed to the vault
    pub boundaries: Boundaries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_around_positive_mid() {
        let b = Boundaries::around(205, 60, 1200, 600);
        assert_eq!((b.base_lower, b.base_upper), (-1020, 1440));
        assert_eq!((b.limit_lower_lower, b.limit_lower_upper), (-420, 180));
        assert_eq!((b.limit_upper_lower, b.limit_upper_upper), (240, 840));
    }

    #[test]
    fn test_boundaries_around_negative_mid_use_floor() {
        let b = Boundaries::around(-5, 60, 120, 60);
        assert_eq!(b.limit_lower_upper, -60);
        assert_eq!(b.limit_upper_lower, 0);
        assert_eq!(b.to_ticks(), [-180, 120, -120, -60, 0, 60]);
    }

    #[test]
    fn test_mid_on_spacing_sits_at_limit_split() {
        let b = Boundaries::around(120, 60, 60, 60);
        assert_eq!(b.limit_lower_upper, 120);
        assert_eq!(b.limit_upper_lower, 180);
    }
}
