use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::ZKSYNC_CHAIN_ID;
use crate::error::Error;

pub const DEFAULT_RPC_URL: &str = "https://zksync-era.rpc.thirdweb.com";

/// Connection settings shared by every adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub chain_id: u64,
    /// Delay between receipt polls.
    pub poll_interval_ms: u64,
    /// How long to wait for a receipt before giving up.
    pub confirmation_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            chain_id: ZKSYNC_CHAIN_ID,
            poll_interval_ms: 1_000,
            confirmation_timeout_secs: 120,
        }
    }
}

impl NetworkConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Defaults overridden by `DEX_RPC_URL`, `DEX_CHAIN_ID`,
    /// `DEX_POLL_INTERVAL_MS` and `DEX_CONFIRMATION_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("no .env loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(url) = lookup("DEX_RPC_URL") {
            config.rpc_url = url;
        }
        if let Some(v) = lookup("DEX_CHAIN_ID") {
            config.chain_id = parse_var("DEX_CHAIN_ID", &v)?;
        }
        if let Some(v) = lookup("DEX_POLL_INTERVAL_MS") {
            config.poll_interval_ms = parse_var("DEX_POLL_INTERVAL_MS", &v)?;
        }
        if let Some(v) = lookup("DEX_CONFIRMATION_TIMEOUT_SECS") {
            config.confirmation_timeout_secs = parse_var("DEX_CONFIRMATION_TIMEOUT_SECS", &v)?;
        }
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }
}

fn parse_var(key: &str, value: &str) -> Result<u64, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key} is not a number: {value:?}")))
}
