//! Contract interfaces generated via alloy's sol! macro.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IAlphaVault {
        function pool() external view returns (address);
        function governance() external view returns (address);
        function rebalance(
            int24 baseLower,
            int24 baseUpper,
            int24 limitLowerLower,
            int24 limitLowerUpper,
            int24 limitUpperLower,
            int24 limitUpperUpper
        ) external;
    }
}
