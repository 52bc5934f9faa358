//! Configuration types for the alpha vault client.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// Configuration for AlphaVault
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphaVaultConfig {
    /// The contract address of the vault holding the base and limit positions
    pub address: Address,
}
