//! Amount parsing and the slippage / deadline rules applied before every call.

use alloy::primitives::utils::{self, ParseUnits};
use alloy::primitives::U256;

use crate::error::Error;

/// Slippage tolerance in percent.
pub const SLIPPAGE_PERCENT: u64 = 2;

/// Swap deadline window.
pub const SWAP_DEADLINE_SECS: u64 = 30 * 60;

/// Minimum acceptable output: 98% of the quote, dividing first like the
/// on-chain integer math does.
pub fn min_output(quoted: U256) -> U256 {
    quoted / U256::from(100) * U256::from(100 - SLIPPAGE_PERCENT)
}

/// Deadline in unix seconds, `window` after `now`.
pub fn deadline(now: u64, window: u64) -> u64 {
    now.saturating_add(window)
}

/// Current wall-clock time in unix seconds.
pub fn unix_now() -> u64 {
    let ts = time::OffsetDateTime::now_utc().unix_timestamp();
    u64::try_from(ts).unwrap_or(0)
}

/// Parse a human-readable decimal amount into base units.
///
/// `"1.5"` with 6 decimals → `1500000`. Negative amounts are rejected.
pub fn parse_units(value: &str, decimals: u8) -> Result<U256, Error> {
    match utils::parse_units(value.trim(), decimals) {
        Ok(ParseUnits::U256(n)) => Ok(n),
        Ok(ParseUnits::I256(_)) => Err(Error::InvalidAmount(format!(
            "negative amount: {value:?}"
        ))),
        Err(e) => Err(Error::InvalidAmount(format!("{value:?}: {e}"))),
    }
}

/// Render base units as a decimal string with trailing zeros trimmed.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let Ok(s) = utils::format_units(amount, decimals) else {
        return amount.to_string();
    };
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
