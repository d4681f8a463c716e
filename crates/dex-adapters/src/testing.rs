//! In-memory chain used by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use alloy::primitives::{keccak256, Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use crate::chain::{Chain, TxReceipt};
use crate::client::Client;
use crate::config::NetworkConfig;
use crate::error::Error;
use crate::signer::signer_from_hex;

/// Hardhat's first default account.
pub(crate) const TEST_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// A transaction the mock was asked to send.
#[derive(Debug, Clone)]
pub(crate) struct SentTx {
    pub hash: TxHash,
    pub from: Option<Address>,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub chain_id: Option<u64>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
}

impl SentTx {
    pub fn selector(&self) -> [u8; 4] {
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&self.data[..4]);
        selector
    }
}

#[derive(Default)]
struct State {
    responses: HashMap<(Address, [u8; 4]), Result<Bytes, (i64, String)>>,
    calls: Vec<TransactionRequest>,
    sent: Vec<SentTx>,
    receipts: HashMap<TxHash, bool>,
    reverting: HashSet<[u8; 4]>,
    send_error: Option<(i64, String)>,
    pending_polls: usize,
    receipt_polls: usize,
}

pub(crate) struct MockChain {
    address: Address,
    state: Mutex<State>,
}

impl MockChain {
    pub fn new() -> Self {
        let address = signer_from_hex(TEST_KEY).unwrap().address();
        Self {
            address,
            state: Mutex::new(State::default()),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Answer `eth_call`s to `to` with `selector` with `ret`.
    pub fn on_call(&self, to: Address, selector: [u8; 4], ret: Vec<u8>) {
        self.state()
            .responses
            .insert((to, selector), Ok(ret.into()));
    }

    pub fn fail_call(&self, to: Address, selector: [u8; 4], code: i64, message: &str) {
        self.state()
            .responses
            .insert((to, selector), Err((code, message.to_string())));
    }

    /// Reject every submission, as a failed gas estimate would.
    pub fn fail_send(&self, code: i64, message: &str) {
        self.state().send_error = Some((code, message.to_string()));
    }

    /// Transactions whose calldata starts with `selector` get a status-0 receipt.
    pub fn revert_selector(&self, selector: [u8; 4]) {
        self.state().reverting.insert(selector);
    }

    pub fn set_pending_polls(&self, polls: usize) {
        self.state().pending_polls = polls;
    }

    pub fn receipt_polls(&self) -> usize {
        self.state().receipt_polls
    }

    pub fn sent(&self) -> Vec<SentTx> {
        self.state().sent.clone()
    }

    pub fn calls(&self) -> Vec<TransactionRequest> {
        self.state().calls.clone()
    }
}

fn request_target(tx: &TransactionRequest) -> Address {
    tx.to
        .and_then(|kind| kind.to().copied())
        .unwrap_or_default()
}

fn request_data(tx: &TransactionRequest) -> Bytes {
    tx.input.input().cloned().unwrap_or_default()
}

#[async_trait]
impl Chain for MockChain {
    fn address(&self) -> Address {
        self.address
    }

    async fn chain_id(&self) -> Result<u64, Error> {
        Ok(324)
    }

    async fn gas_price(&self) -> Result<u128, Error> {
        Ok(250_000_000)
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, Error> {
        let mut state = self.state();
        let to = request_target(&tx);
        let data = request_data(&tx);
        state.calls.push(tx);
        let selector: [u8; 4] = data
            .get(..4)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| Error::Transport("call without selector".to_string()))?;
        match state.responses.get(&(to, selector)) {
            Some(Ok(ret)) => Ok(ret.clone()),
            Some(Err((code, message))) => Err(Error::Rpc {
                code: *code,
                message: message.clone(),
            }),
            None => Err(Error::Rpc {
                code: 3,
                message: format!("execution reverted: no mock for {to}"),
            }),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, Error> {
        let mut state = self.state();
        if let Some((code, message)) = &state.send_error {
            return Err(Error::Rpc {
                code: *code,
                message: message.clone(),
            });
        }
        let hash = keccak256((state.sent.len() as u64).to_be_bytes());
        let sent = SentTx {
            hash,
            from: tx.from,
            to: request_target(&tx),
            value: tx.value.unwrap_or_default(),
            data: request_data(&tx),
            chain_id: tx.chain_id,
            max_fee_per_gas: tx.max_fee_per_gas,
            max_priority_fee_per_gas: tx.max_priority_fee_per_gas,
        };
        let reverts = sent.data.len() >= 4 && state.reverting.contains(&sent.selector());
        state.receipts.insert(hash, !reverts);
        state.sent.push(sent);
        Ok(hash)
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TxReceipt>, Error> {
        let mut state = self.state();
        state.receipt_polls += 1;
        if state.pending_polls > 0 {
            state.pending_polls -= 1;
            return Ok(None);
        }
        Ok(state.receipts.get(&hash).map(|status| TxReceipt {
            transaction_hash: hash,
            block_number: Some(1),
            status: *status,
            gas_used: 21_000,
        }))
    }
}

pub(crate) fn fast_config() -> NetworkConfig {
    NetworkConfig {
        rpc_url: "http://localhost:3050".to_string(),
        poll_interval_ms: 1,
        confirmation_timeout_secs: 5,
        ..NetworkConfig::default()
    }
}

pub(crate) fn test_client(mock: Arc<MockChain>) -> Client {
    test_client_with(mock, &fast_config())
}

pub(crate) fn test_client_with(mock: Arc<MockChain>, config: &NetworkConfig) -> Client {
    Client::new(mock, config)
}
