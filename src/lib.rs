// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Amount value model for a crypto transfer form.
//!
//! The crate keeps one canonical, token-denominated amount string per form
//! and derives everything else from it: the thousands-separated display, the
//! USD view, base-unit integers for the wire, and the MAX fill.
//!
//! # Layers
//!
//! - [`units`]: exact decimal string ⇄ base-unit integer conversion
//! - [`format`]: display / storage string transforms
//! - [`AmountField`]: the focus and token/USD state machine of the input
//! - [`TransferSession`]: the surrounding wizard, validation and submission
//!
//! # Example
//!
//! ```
//! use transfer_amount::{
//!     AmountField, AmountFieldConfig, AmountFieldProps, BlurCause, TokenDecimals, TokenPrice,
//! };
//!
//! let props = AmountFieldProps::new(TokenDecimals::STANDARD);
//! let mut stored = String::new();
//! let mut field = AmountField::new(
//!     AmountFieldConfig::new(TokenPrice::new(0.037624)),
//!     props,
//!     |v: &str| stored = v.to_string(),
//! );
//!
//! field.on_focus();
//! field.on_change("1234.5");
//! field.on_blur(BlurCause::Elsewhere);
//! assert_eq!(field.display_value(), "1,234.5");
//! drop(field);
//! assert_eq!(stored, "1234.5");
//! ```

pub mod bootstrap;
mod command;
pub mod config;
pub mod errors;
pub mod field;
pub mod form;
pub mod format;
pub mod network;
pub mod types;
pub mod units;

mod tracing;

pub use command::{Command, CommandParseError};
pub use config::{AmountFieldConfig, AmountFieldConfigBuilder};
pub use errors::{SubmissionError, TransferError, UnitsError, ValidationError, ValidationErrors};
pub use field::{AmountField, AmountFieldListener, AmountFieldProps, BlurCause, DisplayMode, FieldState};
pub use form::{
    select_balance, AccountBalance, FormField, FormStep, TransferFormValues, TransferRequest,
    TransferSession, TransferSubmitter,
};
pub use format::DisplayPrecision;
pub use network::{NativeCurrencies, NativeCurrencyEntry};
pub use types::tokens::{NormalizedAmount, TokenAmount, TokenDecimals, TokenPrice, UsdValue};
