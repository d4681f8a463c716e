use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Error;

/// Why an operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of one adapter operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TransactionError>,
}

impl TransactionResult {
    pub fn succeeded(metadata: serde_json::Value) -> Self {
        Self {
            success: true,
            metadata: Some(metadata),
            error: None,
        }
    }

    pub fn failed(error: &Error) -> Self {
        Self {
            success: false,
            metadata: None,
            error: Some(TransactionError {
                code: error.code(),
                message: Some(error.to_string()),
            }),
        }
    }

    /// Collapse an operation's outcome into a result at the adapter boundary.
    pub fn from_outcome(
        protocol: &str,
        operation: &str,
        outcome: Result<serde_json::Value, Error>,
    ) -> Self {
        match outcome {
            Ok(metadata) => {
                info!(protocol, operation, "completed successfully");
                Self::succeeded(metadata)
            }
            Err(e) => {
                warn!(protocol, operation, error = %e, "operation failed");
                Self::failed(&e)
            }
        }
    }
}

/// Common surface of every DEX adapter.
///
/// Operations never return `Err`: failures are reported through
/// [`TransactionResult::success`].
#[async_trait]
pub trait Protocol: Send + Sync {
    type SwapArgs: Send + 'static;
    type DepositArgs: Send + 'static;
    type WithdrawArgs: Send + 'static;

    fn name(&self) -> &'static str;

    /// Token symbols the adapter is known to handle.
    fn supported_tokens(&self) -> &'static [&'static str] {
        &[]
    }

    async fn swap(&self, args: Self::SwapArgs) -> TransactionResult;

    async fn deposit(&self, args: Self::DepositArgs) -> TransactionResult;

    async fn withdraw(&self, args: Self::WithdrawArgs) -> TransactionResult;
}
