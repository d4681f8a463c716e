//! PancakeSwap on zkSync Era. Not wired up yet: every operation reports
//! itself as unsupported.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::client::Client;
use crate::error::Error;
use crate::protocol::{Protocol, TransactionResult};

pub struct PancakeSwap {
    client: Client,
}

impl PancakeSwap {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn unsupported(&self, operation: &str) -> TransactionResult {
        warn!(protocol = self.name(), operation, "operation not implemented");
        TransactionResult::failed(&Error::Unsupported(format!(
            "pancakeswap {operation} is not implemented"
        )))
    }
}

#[async_trait]
impl Protocol for PancakeSwap {
    type SwapArgs = Value;
    type DepositArgs = Value;
    type WithdrawArgs = Value;

    fn name(&self) -> &'static str {
        "pancakeswap"
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
