//! Swap, deposit and withdraw adapters for DEX contracts on zkSync Era.
//!
//! Every adapter implements [`Protocol`]. Contract calls are built from
//! `sol!` bindings and sent through a [`Chain`], by default an alloy
//! provider with a local signer; outcomes come back as a
//! [`TransactionResult`].

pub mod address;
pub mod amount;
pub mod chain;
pub mod client;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod erc20;
pub mod error;
pub mod protocol;
pub mod protocols;
pub mod signer;
pub mod token;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use alloy::primitives::{Address, U256};
pub use alloy::signers::local::PrivateKeySigner;
pub use chain::{AlloyChain, Chain, TxReceipt};
pub use client::Client;
pub use config::NetworkConfig;
pub use error::Error;
pub use protocol::{Protocol, TransactionError, TransactionResult};
pub use protocols::{
    DepositRequest, Muteswap, PancakeSwap, SwapRequest, SyncSwap, SyncSwapConfig, WithdrawRequest,
};
pub use token::Token;

/// SyncSwap adapter over JSON-RPC, using the default deployment addresses.
///
/// The node's chain id is checked against `config.chain_id` before the
/// adapter is handed back.
pub async fn connect_syncswap(
    config: &NetworkConfig,
    signer: PrivateKeySigner,
) -> Result<SyncSwap, Error> {
    let client = Client::connect(config, signer).await?;
    client.check_chain_id().await?;
    Ok(SyncSwap::new(client, SyncSwapConfig::default()))
}
