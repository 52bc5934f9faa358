mod config;
mod contracts;
mod pool;

pub use config::UniswapV3PoolConfig;
pub use pool::UniswapV3Pool;
