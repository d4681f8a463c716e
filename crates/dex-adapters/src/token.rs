use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::address::is_native;
use crate::amount::parse_units;
use crate::constants::{self, Deployment, ETH};
use crate::error::Error;

/// A token as supplied by the caller of an adapter operation.
///
/// `balance` is the wallet's human-readable balance; approvals are sized to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub decimals: u8,
    pub contract_address: Address,
    #[serde(default)]
    pub balance: String,
}

impl Token {
    pub fn new(symbol: impl Into<String>, decimals: u8, contract_address: Address) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            contract_address,
            balance: String::new(),
        }
    }

    pub fn with_balance(mut self, balance: impl Into<String>) -> Self {
        self.balance = balance.into();
        self
    }

    /// Build from the static token table.
    pub fn from_table(symbol: &str, deployment: Deployment) -> Option<Self> {
        let info = constants::token(symbol)?;
        let address = info.address(deployment)?;
        Some(Self::new(info.symbol, info.decimals, address))
    }

    /// Native ETH, either by symbol or by address.
    pub fn is_native(&self) -> bool {
        self.symbol == ETH || is_native(self.contract_address)
    }

    /// Balance in base units, used as the approval amount.
    pub fn balance_units(&self) -> Result<U256, Error> {
        parse_units(&self.balance, self.decimals)
    }
}
