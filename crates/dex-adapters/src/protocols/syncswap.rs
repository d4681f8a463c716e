//! SyncSwap classic-pool adapter for zkSync Era.
//!
//! Swaps go through the router as a single-step path. Deposits are
//! single-sided `addLiquidity2` calls and withdrawals burn LP tokens into
//! one asset (native ETH) via `burnLiquiditySingle`.

use alloy::primitives::{address, Address, Bytes, U256};
use alloy::sol_types::{sol_data, SolCall, SolType, SolValue};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::address::{is_native, native_to_zero, normalize};
use crate::amount::{self, format_units, min_output, SWAP_DEADLINE_SECS};
use crate::client::Client;
use crate::constants::{wrapped_native, Deployment, MINIMUM_ETH_AMOUNT_WEI};
use crate::contracts::{ISyncSwapPool, ISyncSwapPoolFactory, ISyncSwapRouter};
use crate::erc20::Erc20;
use crate::error::Error;
use crate::protocol::{Protocol, TransactionResult};
use crate::token::Token;

pub const VAULT: Address = address!("621425a1ef6abe91058e9712575dcc4258f8d091");
pub const ROUTER: Address = address!("2da10a1e27bf85cedd8ffb1abbe97e53391c0295");
pub const CLASSIC_POOL_FACTORY: Address = address!("f2dad89f2788a8cd54625c60b55cd3d2d0aca7cb");
pub const ETH_USDC_POOL: Address = address!("80115c708e12edd42e504c1cd52aea96c547c05c");

/// Withdraw mode 1 unwraps WETH to native ETH on the way out.
pub const WITHDRAW_MODE_UNWRAP: u8 = 1;

pub static SUPPORTED_TOKENS: &[&str] = &[
    "ETH", "USDC", "USDT", "USD+", "LUSD", "BUSD", "WBTC", "ceAVAX", "MAV", "MUTE",
];

pub static EXCLUDED_TOKENS: &[&str] = &["DAI", "BUSD"];

pub static WHITELISTED_POOLS: &[(&str, Address)] = &[
    ("ETH_USDC_POOL", ETH_USDC_POOL),
    ("ETH_USDT_POOL", address!("d3d91634cf4c04ad1b76ce2c06f7385a897f54d3")),
    // ETH-DAI pool stands in for ETH-BUSD
    ("ETH_BUSD_POOL", address!("ad86486f1d225d624443e5df4b2301d03bbe70f6")),
    ("USDC_USDT_POOL", address!("0e595bfcafb552f83e25d24e8a383f88c1ab48a4")),
    ("USDC_BUSD_POOL", address!("69b9a2eface47419d496d9a550a162185999ace5")),
    ("ETH_DAI_POOL", address!("ad86486f1d225d624443e5df4b2301d03bbe70f6")),
    ("USDC_DAI_POOL", address!("69b9a2eface47419d496d9a550a162185999ace5")),
];

/// Contract addresses and limits for one SyncSwap deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSwapConfig {
    pub router: Address,
    pub vault: Address,
    pub pool_factory: Address,
    /// What native ETH (zero address or `0x…800a`) is replaced with.
    pub wrapped_native: Address,
    pub min_native_deposit: U256,
    pub swap_deadline_secs: u64,
}

impl Default for SyncSwapConfig {
    fn default() -> Self {
        Self {
            router: ROUTER,
            vault: VAULT,
            pool_factory: CLASSIC_POOL_FACTORY,
            wrapped_native: wrapped_native(Deployment::Zksync),
            min_native_deposit: MINIMUM_ETH_AMOUNT_WEI,
            swap_deadline_secs: SWAP_DEADLINE_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SwapRequest {
    pub from_token: Token,
    pub from_amount: U256,
    pub to_token: Address,
}

#[derive(Debug, Clone)]
pub struct DepositRequest {
    pub token1_address: Address,
    pub token1_amount: U256,
    pub token2_address: Option<Address>,
    /// When set and non-zero, `token2_address` is deposited alongside token1.
    pub token2_amount: Option<U256>,
    pub pool_address: Option<Address>,
    /// Token1 with its balance; sizes the approval.
    pub token: Token,
}

#[derive(Debug, Clone)]
pub struct WithdrawRequest {
    pub pool_address: Address,
    /// In LP token units.
    pub withdrawal_amount: U256,
    pub lp_token: Token,
}

/// Calldata plus native value for one router call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterCall {
    pub data: Vec<u8>,
    pub value: U256,
}

pub struct SyncSwap {
    client: Client,
    config: SyncSwapConfig,
}

impl SyncSwap {
    pub fn new(client: Client, config: SyncSwapConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &SyncSwapConfig {
        &self.config
    }

    /// Supported and not on the exclude list.
    pub fn supports(symbol: &str) -> bool {
        SUPPORTED_TOKENS.contains(&symbol) && !EXCLUDED_TOKENS.contains(&symbol)
    }

    pub fn whitelisted_pool(name: &str) -> Option<Address> {
        WHITELISTED_POOLS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, a)| *a)
    }

    fn normalize(&self, address: Address) -> Address {
        normalize(address, self.config.wrapped_native)
    }

    /// Classic pool for a pair, via the factory.
    pub async fn get_pool(&self, token_a: Address, token_b: Address) -> Result<Address, Error> {
        let pool = self
            .client
            .call(
                self.config.pool_factory,
                ISyncSwapPoolFactory::getPoolCall {
                    tokenA: token_a,
                    tokenB: token_b,
                },
            )
            .await?;
        if pool.is_zero() {
            return Err(Error::PoolNotFound {
                token_a: token_a.to_string(),
                token_b: token_b.to_string(),
            });
        }
        Ok(pool)
    }

    /// Pool's quoted output for `amount_in` of `token_in`.
    pub async fn quote(&self, pool: Address, token_in: Address, amount_in: U256) -> Result<U256, Error> {
        self.client
            .call(
                pool,
                ISyncSwapPool::getAmountOutCall {
                    tokenIn: token_in,
                    amountIn: amount_in,
                    sender: self.client.address(),
                },
            )
            .await
    }

    /// Approve the router for the token's full caller-supplied balance.
    async fn approve_balance(&self, token: &Token) -> Result<(), Error> {
        let amount = token.balance_units()?;
        debug!(token = %token.symbol, balance = %format_units(amount, token.decimals), "sizing approval to balance");
        Erc20::new(&self.client, token.contract_address)
            .approve(self.config.router, amount)
            .await?;
        Ok(())
    }

    /// Approve the router for whatever the wallet holds of `token`.
    async fn approve_onchain_balance(&self, token: Address) -> Result<(), Error> {
        let erc20 = Erc20::new(&self.client, token);
        let balance = erc20.balance_of(self.client.address()).await?;
        erc20.approve(self.config.router, balance).await?;
        Ok(())
    }

    /// `(tokenIn, to, withdrawMode)` step payload.
    fn step_data(&self, token_in: Address) -> Bytes {
        <(sol_data::Address, sol_data::Address, sol_data::Uint<8>) as SolType>::abi_encode_params(
            &(token_in, self.client.address(), WITHDRAW_MODE_UNWRAP),
        )
        .into()
    }

    /// Router `swap` call for a single-pool path.
    pub fn build_swap_call(
        &self,
        pool: Address,
        from_token: &Token,
        amount_in: U256,
        amount_out_min: U256,
        deadline: u64,
    ) -> RouterCall {
        let native = from_token.is_native();
        let step = ISyncSwapRouter::SwapStep {
            pool,
            data: self.step_data(self.normalize(from_token.contract_address)),
            callback: Address::ZERO,
            callbackData: Bytes::new(),
        };
        let path = ISyncSwapRouter::SwapPath {
            steps: vec![step],
            tokenIn: if native {
                Address::ZERO
            } else {
                from_token.contract_address
            },
            amountIn: amount_in,
        };
        let call = ISyncSwapRouter::swapCall {
            paths: vec![path],
            amountOutMin: amount_out_min,
            deadline: U256::from(deadline),
        };
        RouterCall {
            data: call.abi_encode(),
            value: if native { amount_in } else { U256::ZERO },
        }
    }

    /// Router `addLiquidity2` call. The second input is empty unless a
    /// second token amount was requested.
    pub fn build_deposit_call(&self, pool: Address, request: &DepositRequest) -> RouterCall {
        let mut value = U256::ZERO;

        let token1 = native_to_zero(request.token1_address);
        if token1.is_zero() {
            value += request.token1_amount;
        }
        let mut inputs = vec![ISyncSwapRouter::TokenInput {
            token: token1,
            amount: request.token1_amount,
        }];

        match second_input(request) {
            Some((token2, amount2)) => {
                if token2.is_zero() {
                    value += amount2;
                }
                inputs.push(ISyncSwapRouter::TokenInput {
                    token: token2,
                    amount: amount2,
                });
            }
            None => inputs.push(ISyncSwapRouter::TokenInput {
                token: Address::ZERO,
                amount: U256::ZERO,
            }),
        }

        let call = ISyncSwapRouter::addLiquidity2Call {
            pool,
            inputs,
            data: self.client.address().into_word().to_vec().into(),
            minLiquidity: U256::ZERO,
            callback: Address::ZERO,
            callbackData: Bytes::new(),
        };
        RouterCall {
            data: call.abi_encode(),
            value,
        }
    }

    /// Router `burnLiquiditySingle` call paying out native ETH.
    pub fn build_withdraw_call(&self, request: &WithdrawRequest) -> RouterCall {
        let call = ISyncSwapRouter::burnLiquiditySingleCall {
            pool: request.pool_address,
            liquidity: request.withdrawal_amount,
            data: self.step_data(self.config.wrapped_native),
            minAmount: U256::ZERO,
            callback: Address::ZERO,
            callbackData: Bytes::new(),
        };
        RouterCall {
            data: call.abi_encode(),
            value: U256::ZERO,
        }
    }

    async fn try_swap(&self, request: SwapRequest) -> Result<serde_json::Value, Error> {
        let SwapRequest {
            from_token,
            from_amount,
            to_token,
        } = request;
        info!(
            from = %from_token.symbol,
            amount = %from_amount,
            to = %to_token,
            "swapping tokens on SyncSwap"
        );

        let from = self.normalize(from_token.contract_address);
        let to = self.normalize(to_token);
        let pool = self.get_pool(from, to).await?;
        let amount_out = self.quote(pool, from, from_amount).await?;

        if !from_token.is_native() {
            self.approve_balance(&from_token).await?;
        }

        let amount_out_min = min_output(amount_out);
        let deadline = amount::deadline(amount::unix_now(), self.config.swap_deadline_secs);
        debug!(%pool, %amount_out, %amount_out_min, deadline, "swap parameters");

        let call = self.build_swap_call(pool, &from_token, from_amount, amount_out_min, deadline);
        let receipt = self
            .client
            .send_and_confirm(self.config.router, call.data, call.value)
            .await?;

        Ok(json!({
            "txHash": receipt.transaction_hash.to_string(),
            "pool": pool.to_string(),
            "amountIn": from_amount.to_string(),
            "amountOut": amount_out.to_string(),
            "amountOutMin": amount_out_min.to_string(),
            "deadline": deadline,
        }))
    }

    async fn try_deposit(&self, request: DepositRequest) -> Result<serde_json::Value, Error> {
        info!(
            token = %request.token.symbol,
            amount = %request.token1_amount,
            pool = ?request.pool_address,
            "depositing into SyncSwap pool"
        );

        let native = is_native(request.token1_address);
        if native && request.token1_amount < self.config.min_native_deposit {
            return Err(Error::InvalidAmount(format!(
                "native deposit of {} wei is below the minimum of {}",
                request.token1_amount, self.config.min_native_deposit
            )));
        }

        let pool = match request.pool_address {
            Some(pool) => pool,
            None => {
                let token_a = self.normalize(request.token1_address);
                let token_b = self.normalize(
                    request
                        .token2_address
                        .unwrap_or(self.config.wrapped_native),
                );
                if token_a == token_b {
                    return Err(Error::InvalidRequest(
                        "pool_address or a distinct token2_address is required to locate the pool"
                            .to_string(),
                    ));
                }
                self.get_pool(token_a, token_b).await?
            }
        };

        if !native {
            self.approve_balance(&request.token).await?;
        }
        if let Some((token2, _)) = second_input(&request) {
            if !token2.is_zero() {
                self.approve_onchain_balance(token2).await?;
            }
        }

        let call = self.build_deposit_call(pool, &request);
        let receipt = self
            .client
            .send_and_confirm(self.config.router, call.data, call.value)
            .await?;

        Ok(json!({
            "txHash": receipt.transaction_hash.to_string(),
            "pool": pool.to_string(),
            "amount": request.token1_amount.to_string(),
        }))
    }

    async fn try_withdraw(&self, request: WithdrawRequest) -> Result<serde_json::Value, Error> {
        info!(
            pool = %request.pool_address,
            amount = %request.withdrawal_amount,
            "withdrawing from SyncSwap pool"
        );

        self.approve_balance(&request.lp_token).await?;

        let call = self.build_withdraw_call(&request);
        let receipt = self
            .client
            .send_and_confirm(self.config.router, call.data, call.value)
            .await?;

        Ok(json!({
            "txHash": receipt.transaction_hash.to_string(),
            "pool": request.pool_address.to_string(),
            "liquidity": request.withdrawal_amount.to_string(),
        }))
    }
}

/// Second deposit leg, with the native sentinel mapped to zero.
fn second_input(request: &DepositRequest) -> Option<(Address, U256)> {
    let token2 = request.token2_address?;
    let amount2 = request.token2_amount?;
    if amount2.is_zero() {
        return None;
    }
    Some((native_to_zero(token2), amount2))
}

#[async_trait]
impl Protocol for SyncSwap {
    type SwapArgs = SwapRequest;
    type DepositArgs = DepositRequest;
    type WithdrawArgs = WithdrawRequest;

    fn name(&self) -> &'static str {
        "syncswap"
    }

    fn supported_tokens(&self) -> &'static [&'static str] {
        SUPPORTED_TOKENS
    }

    async fn swap(&self, args: SwapRequest) -> TransactionResult {
        TransactionResult::from_outcome(self.name(), "swap", self.try_swap(args).await)
    }

    async fn deposit(&self, args: DepositRequest) -> TransactionResult {
        TransactionResult::from_outcome(self.name(), "deposit", self.try_deposit(args).await)
    }

    async fn withdraw(&self, args: WithdrawRequest) -> TransactionResult {
        TransactionResult::from_outcome(self.name(), "withdraw", self.try_withdraw(args).await)
    }
}
