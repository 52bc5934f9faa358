mod config;
mod contracts;
mod vault;

pub use config::AlphaVaultConfig;
pub use vault::AlphaVault;
