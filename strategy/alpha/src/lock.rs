//! Rebalance lock
//!
//! A non-reentrant, non-blocking lock held for the whole of a rebalance,
//! including the hand-off to the vault. A second attempt while the lock is
//! held fails with `StrategyError::Locked` instead of waiting.
//!
//! ```plain
//!        try_lock           drop(guard)
//! Unlocked ────────► Locked ──────────► Unlocked
//!                      │
//!                      └── try_lock ──► Err(Locked)
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{StrategyError, StrategyResult};

#[derive(Debug, Default)]
pub struct RebalanceLock {
    /// Status of the lock. `true` represents locked and `false` unlocked
    locked: AtomicBool,
}

impl RebalanceLock {
    /// Attempts to acquire the lock.
    ///
    /// # Returns
    /// * `Ok(LockGuard)` - Lock acquired; released when the guard is dropped
    /// * `Err(StrategyError::Locked)` - Lock already held
    pub fn try_lock(&self) -> StrategyResult<LockGuard<'_>> {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map(|_| LockGuard { lock: self })
            .map_err(|_| StrategyError::Locked)
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }
}

/// Releases the lock on every exit path, including a dropped future.
#[derive(Debug)]
pub struct LockGuard<'a> {
    lock: &'a RebalanceLock,
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.lock.locked.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_fails_while_held() {
        let lock = RebalanceLock::default();
        let guard = lock.try_lock().unwrap();
        assert!(lock.is_locked());
        assert!(matches!(lock.try_lock(), Err(StrategyError::Locked)));
        drop(guard);
        assert!(!lock.is_locked());
        assert!(lock.try_lock().is_ok());
    }

    #[test]
    fn test_released_on_early_return() {
        fn fails(lock: &RebalanceLock) -> StrategyResult<()> {
            let _guard = lock.try_lock()?;
            Err(StrategyError::Unauthorized)
        }

        let lock = RebalanceLock::default();
        assert!(fails(&lock).is_err());
        assert!(!lock.is_locked());
    }
}
