//! Contract interfaces the adapters talk to.

use alloy::sol;

sol! {
    /// The ERC-20 calls needed around approvals.
    #[sol(rpc)]
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
    }

    /// SyncSwap classic pool factory.
    #[sol(rpc)]
    interface ISyncSwapPoolFactory {
        /// Zero address when the pair has no pool.
        function getPool(address tokenA, address tokenB) external view returns (address);
    }

    #[sol(rpc)]
    interface ISyncSwapPool {
        function getAmountOut(address tokenIn, uint256 amountIn, address sender) external view returns (uint256);
    }

    #[sol(rpc)]
    interface ISyncSwapRouter {
        struct SwapStep {
            address pool;
            bytes data;
            address callback;
            bytes callbackData;
        }

        struct SwapPath {
            SwapStep[] steps;
            address tokenIn;
            uint256 amountIn;
        }

        struct TokenInput {
            address token;
            uint256 amount;
        }

        struct TokenAmount {
            address token;
            uint256 amount;
        }

        function swap(SwapPath[] calldata paths, uint256 amountOutMin, uint256 deadline)
            external
            payable
            returns (TokenAmount memory amountOut);

        function addLiquidity2(
            address pool,
            TokenInput[] calldata inputs,
            bytes calldata data,
            uint256 minLiquidity,
            address callback,
            bytes calldata callbackData
        ) external payable returns (uint256 liquidity);

        function burnLiquiditySingle(
            address pool,
            uint256 liquidity,
            bytes calldata data,
            uint256 minAmount,
            address callback,
            bytes calldata callbackData
        ) external returns (TokenAmount memory amountOut);
    }
}
