// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Normalized (human-readable) token amount type

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::amount::TokenAmount;
use super::decimals::TokenDecimals;
use super::usd::UsdValue;

/// Token amount in whole units as a float (1.5 ETH, not 1.5e18 wei)
///
/// This is the lossy, display-side view of an amount. It is what the USD
/// conversions multiply and divide; it is never used for balance or fee
/// arithmetic.
///
/// # Invariant
///
/// Always finite and non-negative. Negative, NaN and infinite inputs become zero.
///
/// # Examples
///
/// ```
/// use transfer_amount::{NormalizedAmount, UsdValue};
///
/// let amount = NormalizedAmount::parse_or_zero("1,000.5");
/// assert_eq!(amount.as_f64(), 1000.5);
/// assert_eq!(NormalizedAmount::parse_or_zero(".").as_f64(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedAmount(f64);

impl NormalizedAmount {
    pub const ZERO: Self = Self(0.0);

    /// Negative and non-finite values are clamped to zero
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() {
            Self(amount.max(0.0))
        } else {
            Self::ZERO
        }
    }

    /// Parse a decimal string, treating anything unparseable as zero
    ///
    /// Thousands separators are stripped first. A lone `"."` or an empty
    /// string is zero, as is any half-typed input that does not parse.
    pub fn parse_or_zero(input: &str) -> Self {
        let cleaned = input.replace(',', "");
        match cleaned.parse::<f64>() {
            Ok(value) => Self::new(value),
            Err(_) => Self::ZERO,
        }
    }

    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Value in USD given a price per token
    pub fn to_usd(&self, price_per_token: f64) -> UsdValue {
        UsdValue::new(self.0 * price_per_token)
    }

    /// Exactly zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Strictly greater than zero, however small
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Convert to exact base units, truncating below the asset's precision
    ///
    /// The float is read through its shortest round-trip decimal
    /// representation, so `1328.9389751222624` yields exactly those digits
    /// rather than the binary expansion of the float.
    ///
    /// ```
    /// use transfer_amount::{NormalizedAmount, TokenDecimals, TokenAmount};
    ///
    /// let amount = NormalizedAmount::new(1.23456789);
    /// assert_eq!(amount.to_base_units(TokenDecimals::USDC), TokenAmount::from(1_234_567u64));
    /// ```
    pub fn to_base_units(&self, decimals: TokenDecimals) -> TokenAmount {
        let Ok(decimal) = BigDecimal::from_str(&self.0.to_string()) else {
            tracing::warn!(amount = self.0, "Failed to read normalized amount as decimal, using 0");
            return TokenAmount::ZERO;
        };
        let (digits, _) = decimal
            .with_scale(i64::from(decimals.as_u8()))
            .as_bigint_and_exponent();
        match U256::from_str_radix(&digits.to_string(), 10) {
            Ok(units) => TokenAmount::new(units),
            Err(e) => {
                tracing::warn!(
                    amount = self.0,
                    decimals = decimals.as_u8(),
                    error = %e,
                    "Normalized amount does not fit in base units, using 0"
                );
                TokenAmount::ZERO
            }
        }
    }
}

impl From<f64> for NormalizedAmount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl std::ops::Mul<f64> for NormalizedAmount {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.0 * rhs)
    }
}

impl std::fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
