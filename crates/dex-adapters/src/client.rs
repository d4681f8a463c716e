use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, TxHash, TxKind, U256};
use alloy::rpc::types::{TransactionInput, TransactionRequest};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolCall;
use tracing::{debug, info};

use crate::chain::{AlloyChain, Chain, TxReceipt};
use crate::config::NetworkConfig;
use crate::error::Error;

/// One chain connection bound to one sending account. Cheap to clone;
/// contract handles borrow it.
#[derive(Clone)]
pub struct Client {
    chain: Arc<dyn Chain>,
    chain_id: u64,
    poll_interval: Duration,
    confirmation_timeout: Duration,
}

impl Client {
    pub fn new(chain: Arc<dyn Chain>, config: &NetworkConfig) -> Self {
        Self {
            chain,
            chain_id: config.chain_id,
            poll_interval: config.poll_interval(),
            confirmation_timeout: config.confirmation_timeout(),
        }
    }

    /// Client talking JSON-RPC to `config.rpc_url`.
    pub async fn connect(config: &NetworkConfig, signer: PrivateKeySigner) -> Result<Self, Error> {
        let chain = AlloyChain::connect(&config.rpc_url, signer).await?;
        Ok(Self::new(Arc::new(chain), config))
    }

    /// The sending account.
    pub fn address(&self) -> Address {
        self.chain.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn chain(&self) -> &dyn Chain {
        self.chain.as_ref()
    }

    /// Fail unless the node is on the configured chain.
    pub async fn check_chain_id(&self) -> Result<(), Error> {
        let remote = self.chain.chain_id().await?;
        if remote != self.chain_id {
            return Err(Error::Config(format!(
                "node reports chain id {remote}, expected {}",
                self.chain_id
            )));
        }
        Ok(())
    }

    /// `eth_call` a contract function and decode its return value.
    pub async fn call<C: SolCall + Send>(&self, to: Address, call: C) -> Result<C::Return, Error> {
        let tx = TransactionRequest {
            from: Some(self.address()),
            to: Some(TxKind::Call(to)),
            input: TransactionInput::new(call.abi_encode().into()),
            ..Default::default()
        };
        let ret = self.chain.call(tx).await?;
        Ok(C::abi_decode_returns(&ret)?)
    }

    /// Sign and submit a transaction; returns once the node has accepted it.
    ///
    /// Fees are `maxFeePerGas = eth_gasPrice` with no priority tip.
    pub async fn send_transaction(
        &self,
        to: Address,
        data: Vec<u8>,
        value: U256,
    ) -> Result<TxHash, Error> {
        let gas_price = self.chain.gas_price().await?;
        debug!(%to, %value, gas_price, "prepared transaction");

        let tx = TransactionRequest {
            from: Some(self.address()),
            to: Some(TxKind::Call(to)),
            input: TransactionInput::new(data.into()),
            value: Some(value),
            chain_id: Some(self.chain_id),
            max_fee_per_gas: Some(gas_price),
            max_priority_fee_per_gas: Some(0),
            ..Default::default()
        };
        let hash = self.chain.send_transaction(tx).await?;
        info!(%hash, %to, "transaction submitted");
        Ok(hash)
    }

    /// Poll until the transaction is mined. A mined-but-failed transaction
    /// is an error, as is running past the confirmation timeout.
    pub async fn wait_for_receipt(&self, hash: TxHash) -> Result<TxReceipt, Error> {
        let started = tokio::time::Instant::now();
        loop {
            if let Some(receipt) = self.chain.transaction_receipt(hash).await? {
                if !receipt.status {
                    return Err(Error::Reverted {
                        tx_hash: hash.to_string(),
                    });
                }
                info!(%hash, block = ?receipt.block_number, "transaction confirmed");
                return Ok(receipt);
            }
            if started.elapsed() >= self.confirmation_timeout {
                return Err(Error::Timeout {
                    tx_hash: hash.to_string(),
                    waited_secs: self.confirmation_timeout.as_secs(),
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    pub async fn send_and_confirm(
        &self,
        to: Address,
        data: Vec<u8>,
        value: U256,
    ) -> Result<TxReceipt, Error> {
        let hash = self.send_transaction(to, data, value).await?;
        self.wait_for_receipt(hash).await
    }

    /// Encode `call`, send it to `to` and wait for it to be mined.
    pub async fn send_call<C: SolCall>(
        &self,
        to: Address,
        call: &C,
        value: U256,
    ) -> Result<TxReceipt, Error> {
        self.send_and_confirm(to, call.abi_encode(), value).await
    }
}
