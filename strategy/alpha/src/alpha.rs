//! Alpha rebalancing strategy
//!
//! Decides when the vault's base and limit orders may be moved and where to.
//! A rebalance runs an ordered list of checks, the first failing check aborts
//! the call with its own error:
//!
//! 1. keeper authorization
//! 2. mid tick far enough from both ends of the tick range
//! 3. mid tick close enough to the TWAP
//!
//! and only then hands the derived boundaries to the vault. `last_mid` is
//! committed after the vault call returns successfully.

use alloy::primitives::Address;
use tracing::{debug, info};

use crate::collaborators::{Pool, Vault};
use crate::config::AlphaStrategyConfig;
use crate::error::{StrategyError, StrategyResult};
use crate::guards::{check_price_bounds, check_twap_deviation};
use crate::lock::RebalanceLock;
use crate::params::{ParameterStore, StrategyConfig};
use crate::twap::compute_twap;
use crate::types::{Boundaries, RebalancePlan};

/// Alpha Strategy
///
/// Drives a vault that holds two positions:
/// - A base order bracketing the current price
/// - A limit order on one side of it, placed as two single-sided legs
pub struct AlphaStrategy<P, V> {
    /// Price source
    pool: P,
    /// Position holder and governance oracle
    vault: V,
    /// Mutable configuration
    params: ParameterStore,
    /// Held for the whole of `rebalance`
    lock: RebalanceLock,
}

impl<P: Pool, V: Vault> AlphaStrategy<P, V> {
    /// Creates a new `AlphaStrategy` instance
    ///
    /// Reads the tick spacing and current tick from the pool; the current tick
    /// becomes the initial `last_mid`.
    ///
    /// # Arguments
    /// * `config` - Initial thresholds, TWAP settings and keeper
    /// * `pool` - Pool client supplying ticks and observations
    /// * `vault` - Vault client receiving rebalances
    ///
    /// # Returns
    /// The strategy, or the first invariant `config` violates
    pub async fn new(config: AlphaStrategyConfig, pool: P, vault: V) -> StrategyResult<Self> {
        let tick_spacing = pool.tick_spacing().await?;
        let last_mid = pool.current_tick().await?;

        let params = ParameterStore::new(StrategyConfig {
            tick_spacing,
            base_threshold: config.base_threshold,
            limit_threshold: config.limit_threshold,
            max_twap_deviation: config.max_twap_deviation,
            twap_duration: config.twap_duration,
            keeper: config.keeper,
            last_mid,
        })?;

        Ok(Self {
            pool,
            vault,
            params,
            lock: RebalanceLock::default(),
        })
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn vault(&self) -> &V {
        &self.vault
    }

    /// Returns a copy of the committed configuration.
    pub fn config(&self) -> StrategyConfig {
        self.params.snapshot()
    }

    pub fn tick_spacing(&self) -> i32 {
        self.params.snapshot().tick_spacing
    }

    pub fn base_threshold(&self) -> i32 {
        self.params.snapshot().base_threshold
    }

    pub fn limit_threshold(&self) -> i32 {
        self.params.snapshot().limit_threshold
    }

    pub fn max_twap_deviation(&self) -> i32 {
        self.params.snapshot().max_twap_deviation
    }

    pub fn twap_duration(&self) -> u32 {
        self.params.snapshot().twap_duration
    }

    pub fn keeper(&self) -> Option<Address> {
        self.params.snapshot().keeper
    }

    pub fn last_mid(&self) -> i32 {
        self.params.snapshot().last_mid
    }

    /// Whether a rebalance is currently running.
    pub fn is_rebalancing(&self) -> bool {
        self.lock.is_locked()
    }

    /// Average pool tick over the configured TWAP window.
    pub async fn get_twap(&self) -> StrategyResult<i32> {
        compute_twap(&self.pool, self.params.snapshot().twap_duration).await
    }

    /// Runs every rebalance check for `caller` at the current price without
    /// touching the vault or the configuration.
    ///
    /// # Returns
    /// The plan `rebalance` would execute right now, or the check that fails
    pub async fn check_rebalance(&self, caller: Address) -> StrategyResult<RebalancePlan> {
        let config = self.params.snapshot();
        self.plan(&config, caller).await
    }

    /// Moves the vault's orders around the current price.
    ///
    /// Holds the rebalance lock from before the keeper check until return; a
    /// nested or concurrent call fails with `StrategyError::Locked`. Nothing is
    /// committed unless the vault call succeeds.
    ///
    /// # Arguments
    /// * `caller` - Identity triggering the rebalance
    ///
    /// # Returns
    /// The executed plan
    pub async fn rebalance(&self, caller: Address) -> StrategyResult<RebalancePlan> {
        let _guard = self.lock.try_lock()?;

        let config = self.params.snapshot();
        let plan = self
            .plan(&config, caller)
            .await
            .inspect_err(|e| debug!(%caller, error = %e, "rebalance rejected"))?;

        self.vault.rebalance(&plan.boundaries).await?;
        self.params.commit_last_mid(plan.mid);

        info!(
            %caller,
            mid = plan.mid,
            twap = plan.twap,
            previous_mid = config.last_mid,
            boundaries = ?plan.boundaries.to_ticks(),
            "rebalanced"
        );
        Ok(plan)
    }

    /// Sets or clears the keeper. Governance only.
    pub async fn set_keeper(&self, caller: Address, keeper: Option<Address>) -> StrategyResult<()> {
        self.ensure_governance(caller).await?;
        let old = self.params.set_keeper(keeper);
        info!(?old, new = ?keeper, "keeper updated");
        Ok(())
    }

    /// Sets the base threshold. Governance only.
    pub async fn set_base_threshold(&self, caller: Address, threshold: i32) -> StrategyResult<()> {
        self.ensure_governance(caller).await?;
        let old = self.params.set_base_threshold(threshold)?;
        info!(old, new = threshold, "base threshold updated");
        Ok(())
    }

    /// Sets the limit threshold. Governance only.
    pub async fn set_limit_threshold(&self, caller: Address, threshold: i32) -> StrategyResult<()> {
        self.ensure_governance(caller).await?;
        let old = self.params.set_limit_threshold(threshold)?;
        info!(old, new = threshold, "limit threshold updated");
        Ok(())
    }

    /// Sets the largest tolerated mid/TWAP distance. Governance only.
    pub async fn set_max_twap_deviation(
        &self,
        caller: Address,
        max_twap_deviation: i32,
    ) -> StrategyResult<()> {
        self.ensure_governance(caller).await?;
        let old = self.params.set_max_twap_deviation(max_twap_deviation)?;
        info!(old, new = max_twap_deviation, "max twap deviation updated");
        Ok(())
    }

    /// Sets the TWAP window in seconds. Governance only.
    pub async fn set_twap_duration(&self, caller: Address, twap_duration: u32) -> StrategyResult<()> {
        self.ensure_governance(caller).await?;
        let old = self.params.set_twap_duration(twap_duration)?;
        info!(old, new = twap_duration, "twap duration updated");
        Ok(())
    }

    async fn ensure_governance(&self, caller: Address) -> StrategyResult<()> {
        if !self.vault.is_governance(caller).await? {
            return Err(StrategyError::NotGovernance);
        }
        Ok(())
    }

    async fn plan(&self, config: &StrategyConfig, caller: Address) -> StrategyResult<RebalancePlan> {
        if let Some(keeper) = config.keeper {
            if caller != keeper {
                return Err(StrategyError::Unauthorized);
            }
        }

        let mid = self.pool.current_tick().await?;
        check_price_bounds(mid, config.max_threshold(), config.tick_spacing)?;

        let twap = compute_twap(&self.pool, config.twap_duration).await?;
        check_twap_deviation(mid, twap, config.max_twap_deviation)?;

        Ok(RebalancePlan {
            mid,
            twap,
            boundaries: Boundaries::around(
                mid,
                config.tick_spacing,
                config.base_threshold,
                config.limit_threshold,
            ),
        })
    }
}
