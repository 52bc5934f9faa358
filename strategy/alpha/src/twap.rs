//! Time-weighted average tick from pool oracle cumulatives.
//!
//! A Uniswap V3 pool accumulates `tick * seconds` into a running tick
//! cumulative. The average tick over a window is the difference of two
//! cumulatives divided by the window length:
//!
//! ```text
//! twap = (cumulative_now - cumulative_then) / duration
//! ```

use anyhow::anyhow;

use crate::collaborators::Pool;
use crate::error::StrategyResult;

/// Average tick between two cumulatives `duration` seconds apart.
///
/// Truncates toward zero, like Solidity signed division. `duration` must be
/// non-zero.
pub fn twap_from_cumulatives(cumulatives: [i64; 2], duration: u32) -> i64 {
    let [then, now] = cumulatives;
    (now - then) / i64::from(duration)
}

/// Observes the pool at `[duration, 0]` seconds ago and returns the average
/// tick over that window.
pub async fn compute_twap<P: Pool + ?Sized>(pool: &P, duration: u32) -> StrategyResult<i32> {
    let cumulatives = pool.observe([duration, 0]).await?;
    let twap = twap_from_cumulatives(cumulatives, duration);
    i32::try_from(twap)
        .map_err(|_| anyhow!("twap {} over {}s is outside the tick range", twap, duration).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::MockPool;
    use crate::error::StrategyError;

    #[test]
    fn test_twap_from_synthetic_cumulatives() {
        assert_eq!(twap_from_cumulatives([1000, 1600], 600), 1);
        assert_eq!(twap_from_cumulatives([0, 720_000], 3600), 200);
    }

    #[test]
    fn test_twap_truncates_toward_zero() {
        assert_eq!(twap_from_cumulatives([0, 599], 600), 0);
        assert_eq!(twap_from_cumulatives([0, -599], 600), 0);
        assert_eq!(twap_from_cumulatives([0, -1201], 600), -2);
    }

    #[tokio::test]
    async fn test_compute_twap_requests_window_and_now() {
        let mut pool = MockPool::new();
        pool.expect_observe()
            .withf(|seconds_agos| *seconds_agos == [3600, 0])
            .times(1)
            .returning(|_| Ok([5_000, 5_000 + 200 * 3600]));

        assert_eq!(compute_twap(&pool, 3600).await.unwrap(), 200);
    }

    #[tokio::test]
    async fn test_compute_twap_propagates_pool_failure() {
        let mut pool = MockPool::new();
        pool.expect_observe()
            .returning(|_| Err(anyhow!("OLD observation")));

        let err = compute_twap(&pool, 60).await.unwrap_err();
        assert!(matches!(err, StrategyError::Collaborator(e) if e.to_string() == "OLD observation"));
    }
}
