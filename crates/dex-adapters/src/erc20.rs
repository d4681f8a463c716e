use alloy::primitives::{Address, U256};
use tracing::info;

use crate::chain::TxReceipt;
use crate::client::Client;
use crate::contracts::IERC20;
use crate::error::Error;

/// ERC-20 handle bound to a client.
pub struct Erc20<'a> {
    client: &'a Client,
    address: Address,
}

impl<'a> Erc20<'a> {
    pub fn new(client: &'a Client, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Approve `spender` for `amount` and wait for the approval to be mined.
    pub async fn approve(&self, spender: Address, amount: U256) -> Result<TxReceipt, Error> {
        info!(token = %self.address, %spender, %amount, "approving ERC-20 token");
        let receipt = self
            .client
            .send_call(self.address, &IERC20::approveCall { spender, amount }, U256::ZERO)
            .await?;
        info!(token = %self.address, "approved ERC-20 token");
        Ok(receipt)
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, Error> {
        self.client
            .call(self.address, IERC20::allowanceCall { owner, spender })
            .await
    }

    pub async fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        self.client
            .call(self.address, IERC20::balanceOfCall { account: owner })
            .await
    }
}
