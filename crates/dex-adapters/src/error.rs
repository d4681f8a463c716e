use alloy::transports::TransportError;
use thiserror::Error;

/// Unified error type for the adapter library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("abi error: {0}")]
    Abi(#[from] alloy::sol_types::Error),

    #[error("node returned error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("signer error: {0}")]
    Signer(#[from] SignerError),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no pool found for {token_a} / {token_b}")]
    PoolNotFound { token_a: String, token_b: String },

    #[error("transaction {tx_hash} reverted")]
    Reverted { tx_hash: String },

    #[error("transaction {tx_hash} not confirmed after {waited_secs}s")]
    Timeout { tx_hash: String, waited_secs: u64 },

    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    /// Numeric code reported alongside a failed transaction result, if the
    /// failure originated from a node that supplied one.
    pub fn code(&self) -> Option<i64> {
        match self {
            Error::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        match e.as_error_resp() {
            Some(payload) => Error::Rpc {
                code: payload.code,
                message: payload.message.to_string(),
            },
            None => Error::Transport(e.to_string()),
        }
    }
}

/// Errors loading keys.
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("missing environment variable {0}")]
    MissingKey(String),
}
