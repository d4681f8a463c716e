use alloy::network::{EthereumWallet, ReceiptResponse};
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;

use crate::error::Error;

/// Mined transaction, reduced to what the adapters report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub status: bool,
    pub gas_used: u64,
}

/// The node operations the adapters need, bound to one sending account.
#[async_trait]
pub trait Chain: Send + Sync {
    /// Account transactions are sent from.
    fn address(&self) -> Address;

    async fn chain_id(&self) -> Result<u64, Error>;

    async fn gas_price(&self) -> Result<u128, Error>;

    /// Read-only call at the latest block; returns the raw return data.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, Error>;

    /// Sign and broadcast. Nonce and gas limit are filled in when missing.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, Error>;

    /// `None` while the transaction is still pending.
    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TxReceipt>, Error>;
}

/// [`Chain`] backed by an alloy provider with a local wallet.
pub struct AlloyChain {
    provider: DynProvider,
    address: Address,
}

impl AlloyChain {
    pub fn new(provider: DynProvider, address: Address) -> Self {
        Self { provider, address }
    }

    /// Connect to `rpc_url`, signing with `signer`.
    pub async fn connect(rpc_url: &str, signer: PrivateKeySigner) -> Result<Self, Error> {
        let address = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(rpc_url)
            .await?
            .erased();
        Ok(Self::new(provider, address))
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

#[async_trait]
impl Chain for AlloyChain {
    fn address(&self) -> Address {
        self.address
    }

    async fn chain_id(&self) -> Result<u64, Error> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn gas_price(&self) -> Result<u128, Error> {
        Ok(self.provider.get_gas_price().await?)
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, Error> {
        Ok(self.provider.call(tx).await?)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, Error> {
        let pending = self.provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TxReceipt>, Error> {
        let receipt = self.provider.get_transaction_receipt(hash).await?;
        Ok(receipt.map(|r| TxReceipt {
            transaction_hash: ReceiptResponse::transaction_hash(&r),
            block_number: ReceiptResponse::block_number(&r),
            status: ReceiptResponse::status(&r),
            gas_used: ReceiptResponse::gas_used(&r),
        }))
    }
}
