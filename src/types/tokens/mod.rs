// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! Newtype wrappers that keep exact base-unit amounts apart from the lossy
//! display-side floats.
//!
//! # Type Relationships
//!
//! ```text
//! TokenAmount (U256, base units, exact)
//!     |
//!     | to_decimal_string(TokenDecimals) / normalize(TokenDecimals)
//!     ↓
//! NormalizedAmount (f64, whole tokens)
//!     |
//!     | TokenPrice::value_of        TokenPrice::tokens_for
//!     ↓                                   ↑
//! UsdValue (f64, USD-denominated) --------+
//! ```

mod amount;
mod decimals;
mod normalized;
mod price;
mod usd;

pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use normalized::NormalizedAmount;
pub use price::TokenPrice;
pub use usd::UsdValue;
