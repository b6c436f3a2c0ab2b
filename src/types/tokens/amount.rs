// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Base-unit token amount type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use std::str::FromStr;

use super::decimals::TokenDecimals;
use super::normalized::NormalizedAmount;
use crate::errors::UnitsError;
use crate::units;

/// Token amount in base units (wei for 18-decimal assets, satoshis for BTC)
///
/// Balances and fees arrive from the data layer as base-unit integer strings
/// and are kept in this form. All arithmetic on them (fee subtraction, MAX)
/// happens on the integer, never on floating point. To render one for a human,
/// use [`to_decimal_string`](Self::to_decimal_string) with the asset's
/// [`TokenDecimals`].
///
/// # Examples
///
/// ```
/// use transfer_amount::{TokenAmount, TokenDecimals};
///
/// // 1.5 ETH in wei (18 decimals)
/// let amount: TokenAmount = "1500000000000000000".parse().unwrap();
/// assert_eq!(amount.to_decimal_string(TokenDecimals::STANDARD), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtract, flooring at zero
    ///
    /// ```
    /// use transfer_amount::TokenAmount;
    ///
    /// let balance = TokenAmount::from(10u64);
    /// let fee = TokenAmount::from(25u64);
    /// assert_eq!(balance.saturating_sub(fee), TokenAmount::ZERO);
    /// ```
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Render as a canonical decimal string (no separators, no trailing zeros)
    pub fn to_decimal_string(&self, decimals: TokenDecimals) -> String {
        units::from_base_units(self.0, decimals)
    }

    /// Human-readable amount as f64, for USD valuation only
    ///
    /// Goes through the exact decimal string first so that the only
    /// precision loss is the final float parse.
    pub fn normalize(&self, decimals: TokenDecimals) -> NormalizedAmount {
        NormalizedAmount::parse_or_zero(&self.to_decimal_string(decimals))
    }
}

impl FromStr for TokenAmount {
    type Err = UnitsError;

    /// Parse a base-unit integer string such as `"5000000000000000000000"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UnitsError::invalid_base_units(s));
        }
        U256::from_str_radix(s, 10)
            .map(Self)
            .map_err(|_| UnitsError::invalid_base_units(s))
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_unit_string() {
        let amount: TokenAmount = "5000000000000000000000".parse().unwrap();
        assert_eq!(
            amount.as_u256(),
            U256::from(5_000u64) * U256::from(10u64).pow(U256::from(18u64))
        );
    }

    #[test]
    fn test_parse_rejects_decimal_and_empty() {
        assert!("1.5".parse::<TokenAmount>().is_err());
        assert!("".parse::<TokenAmount>().is_err());
        assert!("-1".parse::<TokenAmount>().is_err());
        assert!("0x10".parse::<TokenAmount>().is_err());
    }

    #[test]
    fn test_to_decimal_string() {
        let raw = TokenAmount::from(100_500_000u64);
        assert_eq!(raw.to_decimal_string(TokenDecimals::USDC), "100.5");

        let raw = TokenAmount::from(1_000_000_000_000_000_000u64);
        assert_eq!(raw.to_decimal_string(TokenDecimals::STANDARD), "1");
    }

    #[test]
    fn test_normalize_eth() {
        let raw = TokenAmount::from(1_500_000_000_000_000_000u64);
        let normalized = raw.normalize(TokenDecimals::STANDARD);
        assert_eq!(normalized.as_f64(), 1.5);
    }

    #[test]
    fn test_normalize_wbtc() {
        let raw = TokenAmount::from(50_000_000u64);
        let normalized = raw.normalize(TokenDecimals::WBTC);
        assert_eq!(normalized.as_f64(), 0.5);
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let balance = TokenAmount::from(10u64);
        let fee = TokenAmount::from(11u64);
        assert_eq!(balance.saturating_sub(fee), TokenAmount::ZERO);
        assert_eq!(fee.saturating_sub(balance), TokenAmount::from(1u64));
    }

    #[test]
    fn test_token_amount_addition() {
        let total = TokenAmount::from(1000u64) + TokenAmount::from(2000u64);
        assert_eq!(total.as_u256(), U256::from(3000u64));
    }

    #[test]
    fn test_display_formatting() {
        let amount = TokenAmount::from(12345u64);
        assert_eq!(format!("{}", amount), "12345");
    }

    #[test]
    fn test_serialization() {
        let amount = TokenAmount::from(12345u64);
        let json = serde_json::to_string(&amount).unwrap();
        let deserialized: TokenAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, deserialized);
    }
}
