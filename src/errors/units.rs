// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for base-unit conversion.

/// Errors from converting between decimal strings and base units.
///
/// Only the strict conversion path reports these. The input-facing paths
/// (typing, MAX, display) go through
/// [`parse_balance`](crate::units::parse_balance), which logs and resolves
/// them to zero.
///
/// # Examples
///
/// ```rust
/// use transfer_amount::{units, TokenDecimals, UnitsError};
///
/// let err = units::to_base_units("1.2.3", TokenDecimals::STANDARD).unwrap_err();
/// assert!(matches!(err, UnitsError::MultipleDecimalPoints { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitsError {
    /// The amount contains more than one `.`.
    #[error("Amount {input:?} contains more than one decimal point")]
    MultipleDecimalPoints {
        /// The rejected input
        input: String,
    },

    /// The amount contains something other than digits and a single `.`.
    #[error("Amount {input:?} contains invalid character {character:?}")]
    InvalidCharacter {
        /// The rejected input
        input: String,
        /// First offending character
        character: char,
    },

    /// The scaled amount does not fit in 256 bits.
    #[error("Amount {input:?} at {decimals} decimals overflows 256 bits")]
    Overflow {
        /// The rejected input
        input: String,
        /// Decimals used for scaling
        decimals: u8,
    },

    /// A base-unit string was not a plain non-negative integer.
    #[error("Invalid base-unit amount {input:?}")]
    InvalidBaseUnits {
        /// The rejected input
        input: String,
    },
}

impl UnitsError {
    pub fn multiple_decimal_points(input: impl Into<String>) -> Self {
        UnitsError::MultipleDecimalPoints {
            input: input.into(),
        }
    }

    pub fn invalid_character(input: impl Into<String>, character: char) -> Self {
        UnitsError::InvalidCharacter {
            input: input.into(),
            character,
        }
    }

    pub fn overflow(input: impl Into<String>, decimals: u8) -> Self {
        UnitsError::Overflow {
            input: input.into(),
            decimals,
        }
    }

    pub fn invalid_base_units(input: impl Into<String>) -> Self {
        UnitsError::InvalidBaseUnits {
            input: input.into(),
        }
    }
}
