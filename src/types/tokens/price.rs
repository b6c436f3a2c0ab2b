// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token price type (USD per token)

use serde::{Deserialize, Serialize};

use super::normalized::NormalizedAmount;
use super::usd::UsdValue;

/// Price of one whole token in USD
///
/// Supplied by a pricing collaborator and held constant for the duration of
/// a conversion. A zero price is representable (a feed may report it) but
/// every conversion out of USD guards against dividing by it.
///
/// # Examples
///
/// ```
/// use transfer_amount::{TokenPrice, NormalizedAmount};
///
/// let price = TokenPrice::new(0.037624);
/// let usd = price.value_of(NormalizedAmount::new(100.0));
/// assert_eq!(usd.to_fixed(2), "3.76");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPrice(f64);

impl TokenPrice {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(price_per_token: f64) -> Self {
        Self(price_per_token)
    }

    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Zero, negative, or not a number
    pub fn is_unusable(&self) -> bool {
        !self.0.is_finite() || self.0 <= 0.0
    }

    /// USD value of an amount of tokens
    pub fn value_of(&self, amount: NormalizedAmount) -> UsdValue {
        if self.is_unusable() {
            return UsdValue::ZERO;
        }
        amount.to_usd(self.0)
    }

    /// Number of tokens a USD amount buys
    ///
    /// Returns `None` when the price cannot be divided by.
    ///
    /// ```
    /// use transfer_amount::{TokenPrice, UsdValue};
    ///
    /// assert!(TokenPrice::ZERO.tokens_for(UsdValue::new(10.0)).is_none());
    /// let tokens = TokenPrice::new(2000.0).tokens_for(UsdValue::new(5000.0)).unwrap();
    /// assert_eq!(tokens.as_f64(), 2.5);
    /// ```
    pub fn tokens_for(&self, usd_value: UsdValue) -> Option<NormalizedAmount> {
        if self.is_unusable() {
            None
        } else {
            Some(NormalizedAmount::new(usd_value.as_f64() / self.0))
        }
    }
}

impl From<f64> for TokenPrice {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.6}", self.0)
    }
}
