pub mod muteswap;
pub mod pancakeswap;
pub mod syncswap;

pub use muteswap::Muteswap;
pub use pancakeswap::PancakeSwap;
pub use syncswap::{DepositRequest, SwapRequest, SyncSwap, SyncSwapConfig, WithdrawRequest};
