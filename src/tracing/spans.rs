// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for amount-field and transfer operations.
//!
//! Telemetry stays out of the business logic: each instrumented operation
//! has a span helper here instead of an `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn on_max(&mut self) -> bool {
//!     let span = spans::amount_field_max(self.props.decimals);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

use crate::field::DisplayMode;
use crate::types::tokens::TokenDecimals;

/// Create span for one keystroke in the amount input.
///
/// Fires on every key press, hence trace level.
#[inline]
pub(crate) fn amount_field_change(mode: DisplayMode, input_len: usize) -> Span {
    tracing::trace_span!(
        "transfer_amount.amount_field_change",
        mode = %mode,
        input_len = input_len,
    )
}

/// Create span for a MAX fill.
#[inline]
pub(crate) fn amount_field_max(mode: DisplayMode, decimals: TokenDecimals) -> Span {
    tracing::debug_span!(
        "transfer_amount.amount_field_max",
        mode = %mode,
        decimals = decimals.as_u8(),
    )
}

/// Create span for a token/USD display toggle.
#[inline]
pub(crate) fn amount_field_toggle(from: DisplayMode) -> Span {
    tracing::debug_span!("transfer_amount.amount_field_toggle", from = %from)
}

/// Create span for a transfer submission.
///
/// Parent: None (root span for this operation)
/// Children: the submitter's own spans
#[inline]
pub(crate) fn submit_transfer(vault_id: &str, asset_id: &str) -> Span {
    tracing::info_span!(
        "transfer_amount.submit_transfer",
        vault_id = %vault_id,
        asset_id = %asset_id,
    )
}
