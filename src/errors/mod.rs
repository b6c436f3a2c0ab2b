// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the transfer-amount library.
//!
//! Same hybrid approach throughout:
//!
//! - **Module-specific errors** for fine-grained handling ([`UnitsError`],
//!   [`ValidationErrors`], [`SubmissionError`])
//! - **Unified error type** ([`TransferError`]) when the source does not matter
//!
//! Note that nothing in the amount value model itself returns an error. User
//! input that does not parse degrades to zero or stays as transient display
//! text; these types cover the strict conversion API and the form edge.
//!
//! # Examples
//!
//! ```rust,ignore
//! use transfer_amount::{TransferError, TransferSession, TransferSubmitter};
//!
//! async fn send(session: &mut TransferSession, api: &impl TransferSubmitter) {
//!     match session.submit(api).await {
//!         Ok(request) => println!("submitted {}", request.amount),
//!         Err(TransferError::Validation(errors)) => {
//!             for e in errors.errors() {
//!                 eprintln!("{}: {}", e.field(), e);
//!             }
//!         }
//!         Err(e) => eprintln!("Transfer failed: {e}"),
//!     }
//! }
//! ```

mod submission;
mod units;
mod validation;

pub use submission::SubmissionError;
pub use units::UnitsError;
pub use validation::{ValidationError, ValidationErrors};

/// Unified error type for transfer operations.
///
/// Module-specific errors convert via `From`, so `?` works across them.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Error from base-unit conversion.
    #[error("Amount conversion error: {0}")]
    Units(#[from] UnitsError),

    /// The form did not pass validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// The submission endpoint failed.
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}
