//! Token metadata and well-known addresses.

use alloy::primitives::{address, Address, U256};
use serde::Serialize;

/// 0.003 ETH; smaller native deposits are rejected.
pub const MINIMUM_ETH_AMOUNT_WEI: U256 = U256::from_limbs([3_000_000_000_000_000, 0, 0, 0]);
pub const ZERO_ADDRESS: Address = Address::ZERO;
/// Native ETH system contract on zkSync Era.
pub const ETH_ADDRESS_ZKSYNC: Address = address!("000000000000000000000000000000000000800a");

pub const ETH: &str = "ETH";
pub const WETH: &str = "WETH";
pub const USDC: &str = "USDC";

/// zkSync Era mainnet.
pub const ZKSYNC_CHAIN_ID: u64 = 324;

/// Deployment a token address belongs to. Mute uses its own WETH contract,
/// so it is keyed separately from the rest of zkSync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Deployment {
    Zksync,
    ZksyncMute,
}

/// Static token descriptor.
#[derive(Debug, Clone, Copy)]
pub struct TokenInfo {
    pub symbol: &'static str,
    pub decimals: u8,
    addresses: &'static [(Deployment, Address)],
}

impl TokenInfo {
    pub fn address(&self, deployment: Deployment) -> Option<Address> {
        self.addresses
            .iter()
            .find(|(d, _)| *d == deployment)
            .map(|(_, a)| *a)
    }

    pub fn deployments(&self) -> impl Iterator<Item = Deployment> + '_ {
        self.addresses.iter().map(|(d, _)| *d)
    }
}

pub static TOKENS: &[TokenInfo] = &[
    TokenInfo {
        symbol: ETH,
        decimals: 18,
        addresses: &[(Deployment::Zksync, ETH_ADDRESS_ZKSYNC)],
    },
    TokenInfo {
        symbol: WETH,
        decimals: 18,
        addresses: &[
            (Deployment::Zksync, ETH_ADDRESS_ZKSYNC),
            (
                Deployment::ZksyncMute,
                address!("5aea5775959fbc2557cc8789bc1bf90a239d9a91"),
            ),
        ],
    },
    TokenInfo {
        symbol: USDC,
        decimals: 6,
        addresses: &[(
            Deployment::Zksync,
            address!("3355df6d4c9c3035724fd0e3914de96a5a83aaf4"),
        )],
    },
];

/// Look up a token by symbol (case-insensitive).
pub fn token(symbol: &str) -> Option<&'static TokenInfo> {
    TOKENS.iter().find(|t| t.symbol.eq_ignore_ascii_case(symbol))
}

/// The wrapped-native contract for a deployment, falling back to the zero
/// address when the table has no entry.
pub fn wrapped_native(deployment: Deployment) -> Address {
    token(WETH)
        .and_then(|t| t.address(deployment))
        .unwrap_or(Address::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_deployment_resolves() {
        for info in TOKENS {
            for deployment in info.deployments() {
                let addr = info.address(deployment).unwrap();
                assert!(!addr.is_zero(), "{} {deployment:?}", info.symbol);
            }
        }
    }

    #[test]
    fn test_lookup_by_symbol() {
        assert_eq!(token("usdc").unwrap().decimals, 6);
        assert_eq!(token("ETH").unwrap().decimals, 18);
        assert!(token("DOGE").is_none());
    }

    #[test]
    fn test_wrapped_native_per_deployment() {
        assert_eq!(wrapped_native(Deployment::Zksync), ETH_ADDRESS_ZKSYNC);
        assert_eq!(
            wrapped_native(Deployment::ZksyncMute),
            "0x5AEa5775959fBC2557Cc8789bC1bf90A239D9a91".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn test_minimum_deposit_is_three_finney() {
        assert_eq!(MINIMUM_ETH_AMOUNT_WEI.to_string(), "3000000000000000");
    }

    #[test]
    fn test_usdc_has_no_mute_deployment() {
        assert!(token(USDC).unwrap().address(Deployment::ZksyncMute).is_none());
    }
}
