//! Configuration types for Uniswap V3 clients.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Configuration for UniswapV3Pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniswapV3PoolConfig {
    /// The contract address of the Uniswap V3 pool
    pub address: Address,
}
