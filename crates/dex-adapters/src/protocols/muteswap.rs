//! Muteswap on zkSync Era. Only the wallet is set up so far; the router
//! integration is not built.

use std::fmt;

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::constants::{wrapped_native, Deployment};
use crate::error::Error;
use crate::protocol::{Protocol, TransactionResult};
use crate::signer::{signer_from_env, PRIVATE_KEY_ENV};

pub struct Muteswap {
    wallet: PrivateKeySigner,
}

impl fmt::Debug for Muteswap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Muteswap")
            .field("address", &self.wallet.address())
            .finish()
    }
}

impl Muteswap {
    pub fn new(wallet: PrivateKeySigner) -> Self {
        info!(address = %wallet.address(), "muteswap wallet loaded");
        Self { wallet }
    }

    /// Wallet from `PRIVATE_KEY` (or `.env`).
    pub fn from_env() -> Result<Self, Error> {
        Self::from_env_var(PRIVATE_KEY_ENV)
    }

    pub fn from_env_var(var: &str) -> Result<Self, Error> {
        Ok(Self::new(signer_from_env(var)?))
    }

    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Mute's own WETH contract.
    pub fn wrapped_native(&self) -> Address {
        wrapped_native(Deployment::ZksyncMute)
    }

    fn unsupported(&self, operation: &str) -> TransactionResult {
        warn!(protocol = self.name(), operation, "operation not implemented");
        TransactionResult::failed(&Error::Unsupported(format!(
            "muteswap {operation} is not implemented"
        )))
    }
}

#[async_trait]
impl Protocol for Muteswap {
    type SwapArgs = Value;
    type DepositArgs = Value;
    type WithdrawArgs = Value;

    fn name(&self) -> &'static str {
        "muteswap"
    }

    async fn swap(&self, _args: Value) -> TransactionResult {
        self.unsupported("swap")
    }

    async fn deposit(&self, _args: Value) -> TransactionResult {
        self.unsupported("deposit")
    }

    async fn withdraw(&self, _args: Value) -> TransactionResult {
        self.unsupported("withdraw")
    }
}
