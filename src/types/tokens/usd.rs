// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! USD value type

use serde::{Deserialize, Serialize};

use super::normalized::NormalizedAmount;
use crate::format;

/// A USD-denominated value
///
/// Only ever shown to the user. The amount stored by the form is always
/// token-denominated; a `UsdValue` goes back through
/// [`TokenPrice::tokens_for`](super::TokenPrice::tokens_for) before it is stored.
///
/// # Examples
///
/// ```
/// use transfer_amount::UsdValue;
///
/// let value = UsdValue::new(3.7624);
/// assert_eq!(value.to_fixed(2), "3.76");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdValue(f64);

impl UsdValue {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Parse typed USD text, treating anything unparseable as zero
    pub fn parse_or_zero(input: &str) -> Self {
        Self(NormalizedAmount::parse_or_zero(input).as_f64())
    }

    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Fixed-point rendering without separators, e.g. `"3.76"`
    ///
    /// Ties round away from zero; non-finite values render as zero.
    pub fn to_fixed(&self, fraction_digits: usize) -> String {
        format::to_fixed(self.0, fraction_digits)
    }
}

impl From<f64> for UsdValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.to_fixed(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed() {
        assert_eq!(UsdValue::new(3.7624).to_fixed(2), "3.76");
        assert_eq!(UsdValue::new(187.7438).to_fixed(2), "187.74");
        assert_eq!(UsdValue::new(5.0).to_fixed(2), "5.00");
        assert_eq!(UsdValue::new(f64::NAN).to_fixed(2), "0.00");
        assert_eq!(UsdValue::new(0.125).to_fixed(2), "0.13");
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(UsdValue::parse_or_zero("12.5").as_f64(), 12.5);
        assert_eq!(UsdValue::parse_or_zero("."), UsdValue::ZERO);
        assert_eq!(UsdValue::parse_or_zero(""), UsdValue::ZERO);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", UsdValue::new(1234.567)), "$1234.57");
    }

    #[test]
    fn test_serialization() {
        let value = UsdValue::new(100.50);
        let json = serde_json::to_string(&value).unwrap();
        let deserialized: UsdValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, deserialized);
    }
}
