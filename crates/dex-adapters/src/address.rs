//! Native-asset handling on top of [`alloy::primitives::Address`].
//!
//! zkSync Era exposes native ETH at the system contract `0x…800a`, and
//! callers also use the zero address for it. Routers want the zero address
//! for a native input; pool lookups want the wrapped token.

use std::str::FromStr;

use alloy::primitives::Address;

use crate::constants::ETH_ADDRESS_ZKSYNC;
use crate::error::Error;

/// True for the zero address and for the chain's native-asset sentinel.
pub fn is_native(address: Address) -> bool {
    address.is_zero() || address == ETH_ADDRESS_ZKSYNC
}

/// Map the zero address or native sentinel to `wrapped`, leaving everything
/// else untouched. Pool lookups and encoded steps always use the result.
pub fn normalize(address: Address, wrapped: Address) -> Address {
    if is_native(address) {
        wrapped
    } else {
        address
    }
}

/// Map the native sentinel to the zero address, which is how routers mark
/// a native-asset input.
pub fn native_to_zero(address: Address) -> Address {
    if is_native(address) {
        Address::ZERO
    } else {
        address
    }
}

/// Parse caller-supplied hex in any letter case.
pub fn parse_address(s: &str) -> Result<Address, Error> {
    Address::from_str(s.trim()).map_err(|e| Error::InvalidAddress(format!("{s:?}: {e}")))
}
