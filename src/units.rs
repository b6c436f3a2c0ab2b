// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact conversion between decimal strings and integer base units
//!
//! `"3333.67"` at 18 decimals is `3333670000000000000000` base units and back.
//! Both directions are pure string/integer operations on [`U256`]; no floating
//! point is involved.

use alloy_primitives::U256;

use crate::errors::UnitsError;
use crate::types::tokens::{TokenAmount, TokenDecimals};

/// Convert a decimal string to base units
///
/// The input may contain digits and at most one `.`; thousands separators
/// must already be stripped. An empty string or a lone `.` is zero. The
/// fractional part is right-padded with zeros to `decimals` digits, or
/// truncated (never rounded) when it is longer.
///
/// # Examples
///
/// ```
/// use transfer_amount::{units, TokenDecimals};
/// use alloy_primitives::U256;
///
/// let wei = units::to_base_units("0.5", TokenDecimals::STANDARD).unwrap();
/// assert_eq!(wei, U256::from(500_000_000_000_000_000u64));
///
/// // Digits past the asset's precision are dropped
/// let units = units::to_base_units("1.2345679", TokenDecimals::USDC).unwrap();
/// assert_eq!(units, U256::from(1_234_567u64));
/// ```
pub fn to_base_units(input: &str, decimals: TokenDecimals) -> Result<U256, UnitsError> {
    if let Some(character) = input.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(UnitsError::invalid_character(input, character));
    }

    let (whole, fraction) = match input.split_once('.') {
        Some((_, rest)) if rest.contains('.') => {
            return Err(UnitsError::multiple_decimal_points(input));
        }
        Some((whole, fraction)) => (whole, fraction),
        None => (input, ""),
    };

    let scale = decimals.as_usize();
    let mut digits = String::with_capacity(whole.len() + scale);
    digits.push_str(whole.trim_start_matches('0'));
    if fraction.len() >= scale {
        digits.push_str(&fraction[..scale]);
    } else {
        digits.push_str(fraction);
        digits.extend(std::iter::repeat_n('0', scale - fraction.len()));
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 10).map_err(|_| UnitsError::overflow(input, decimals.as_u8()))
}

/// Convert base units to a canonical decimal string
///
/// The result has no thousands separators, no trailing fractional zeros and
/// no trailing `.`.
///
/// # Examples
///
/// ```
/// use transfer_amount::{units, TokenDecimals};
/// use alloy_primitives::U256;
///
/// let one_and_a_half = U256::from(1_500_000_000_000_000_000u64);
/// assert_eq!(units::from_base_units(one_and_a_half, TokenDecimals::STANDARD), "1.5");
/// assert_eq!(units::from_base_units(U256::ZERO, TokenDecimals::STANDARD), "0");
/// ```
pub fn from_base_units(amount: U256, decimals: TokenDecimals) -> String {
    let digits = amount.to_string();
    let scale = decimals.as_usize();
    if scale == 0 {
        return digits;
    }

    let padded = if digits.len() <= scale {
        format!("{digits:0>width$}", width = scale + 1)
    } else {
        digits
    };
    let (whole, fraction) = padded.split_at(padded.len() - scale);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Parse user-facing text into base units, resolving failures to zero
///
/// Commas are stripped first. Anything [`to_base_units`] rejects is logged
/// and treated as zero; this is the conversion the input-facing paths use.
///
/// ```
/// use transfer_amount::{units, TokenAmount, TokenDecimals};
///
/// let amount = units::parse_balance("1,000.50", TokenDecimals::STANDARD);
/// assert_eq!(amount.to_decimal_string(TokenDecimals::STANDARD), "1000.5");
/// assert_eq!(units::parse_balance("12abc", TokenDecimals::STANDARD), TokenAmount::ZERO);
/// ```
pub fn parse_balance(input: &str, decimals: TokenDecimals) -> TokenAmount {
    let cleaned = input.replace(',', "");
    match to_base_units(&cleaned, decimals) {
        Ok(units) => TokenAmount::new(units),
        Err(e) => {
            tracing::debug!(input, error = %e, "Unparseable amount, using 0");
            TokenAmount::ZERO
        }
    }
}

/// Spendable amount: balance minus fee, floored at zero
///
/// `None` while either input is still unknown.
pub fn available_amount(
    balance: Option<TokenAmount>,
    fee: Option<TokenAmount>,
) -> Option<TokenAmount> {
    Some(balance?.saturating_sub(fee?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(s: &str) -> U256 {
        U256::from_str_radix(s, 10).unwrap()
    }

    #[test]
    fn test_to_base_units_whole() {
        assert_eq!(
            to_base_units("1", TokenDecimals::STANDARD).unwrap(),
            wei("1000000000000000000")
        );
    }

    #[test]
    fn test_to_base_units_fraction() {
        assert_eq!(
            to_base_units("3333.67", TokenDecimals::STANDARD).unwrap(),
            wei("3333670000000000000000")
        );
        assert_eq!(
            to_base_units("100.50", TokenDecimals::USDC).unwrap(),
            U256::from(100_500_000u64)
        );
    }

    #[test]
    fn test_to_base_units_empty_and_dot_are_zero() {
        assert_eq!(to_base_units("", TokenDecimals::STANDARD).unwrap(), U256::ZERO);
        assert_eq!(to_base_units(".", TokenDecimals::STANDARD).unwrap(), U256::ZERO);
        assert_eq!(to_base_units("000", TokenDecimals::STANDARD).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_to_base_units_half_typed() {
        assert_eq!(to_base_units(".5", TokenDecimals::USDC).unwrap(), U256::from(500_000u64));
        assert_eq!(to_base_units("5.", TokenDecimals::USDC).unwrap(), U256::from(5_000_000u64));
    }

    #[test]
    fn test_to_base_units_truncates_not_rounds() {
        assert_eq!(to_base_units("0.999", TokenDecimals::new(2)).unwrap(), U256::from(99u64));
        assert_eq!(to_base_units("7.9", TokenDecimals::new(0)).unwrap(), U256::from(7u64));
    }

    #[test]
    fn test_to_base_units_rejects_bad_input() {
        assert_eq!(
            to_base_units("1,000", TokenDecimals::STANDARD),
            Err(UnitsError::invalid_character("1,000", ','))
        );
        assert_eq!(
            to_base_units("1.0.0", TokenDecimals::STANDARD),
            Err(UnitsError::multiple_decimal_points("1.0.0"))
        );
        assert!(to_base_units("-1", TokenDecimals::STANDARD).is_err());
    }

    #[test]
    fn test_to_base_units_overflow() {
        let huge = "9".repeat(60);
        assert!(matches!(
            to_base_units(&huge, TokenDecimals::new(38)),
            Err(UnitsError::Overflow { decimals: 38, .. })
        ));
    }

    #[test]
    fn test_from_base_units_trims() {
        assert_eq!(from_base_units(wei("1000000000000000000"), TokenDecimals::STANDARD), "1");
        assert_eq!(from_base_units(wei("1500000000000000000"), TokenDecimals::STANDARD), "1.5");
        assert_eq!(
            from_base_units(wei("3333670000000000000000"), TokenDecimals::STANDARD),
            "3333.67"
        );
        assert_eq!(from_base_units(U256::from(100_500_000u64), TokenDecimals::USDC), "100.5");
    }

    #[test]
    fn test_from_base_units_small_and_zero_decimals() {
        assert_eq!(from_base_units(U256::from(1u64), TokenDecimals::STANDARD), "0.000000000000000001");
        assert_eq!(from_base_units(U256::from(42u64), TokenDecimals::new(0)), "42");
        assert_eq!(from_base_units(U256::ZERO, TokenDecimals::USDC), "0");
    }

    #[test]
    fn test_parse_balance_strips_commas() {
        assert_eq!(
            parse_balance("1,000.50", TokenDecimals::STANDARD).as_u256(),
            wei("1000500000000000000000")
        );
        assert_eq!(parse_balance("", TokenDecimals::STANDARD), TokenAmount::ZERO);
        assert_eq!(parse_balance(".", TokenDecimals::STANDARD), TokenAmount::ZERO);
    }

    #[test]
    fn test_available_amount() {
        let balance = TokenAmount::new(wei("5000000000000000000000"));
        let fee = TokenAmount::new(wei("10000000000000000000"));
        let available = available_amount(Some(balance), Some(fee)).unwrap();
        assert_eq!(available.to_decimal_string(TokenDecimals::STANDARD), "4990");

        assert_eq!(available_amount(Some(fee), Some(balance)), Some(TokenAmount::ZERO));
        assert_eq!(available_amount(None, Some(fee)), None);
        assert_eq!(available_amount(Some(balance), None), None);
    }
}
