//! Loading the local signing key.

use std::str::FromStr;

use alloy::signers::local::PrivateKeySigner;
use tracing::debug;

use crate::error::SignerError;

pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Parse a hex private key, with or without `0x`.
pub fn signer_from_hex(private_key: &str) -> Result<PrivateKeySigner, SignerError> {
    PrivateKeySigner::from_str(private_key.trim()).map_err(|e| SignerError::InvalidKey(e.to_string()))
}

/// Load the key named by `var`, reading a `.env` file first if one exists.
pub fn signer_from_env(var: &str) -> Result<PrivateKeySigner, SignerError> {
    if let Err(e) = dotenvy::dotenv() {
        debug!("no .env loaded: {e}");
    }
    let raw = std::env::var(var).map_err(|_| SignerError::MissingKey(var.to_string()))?;
    signer_from_hex(&raw)
}
