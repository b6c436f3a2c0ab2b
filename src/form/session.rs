// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use tracing::{info, warn, Instrument};

use super::{FormStep, TransferFormValues, TransferRequest, TransferSubmitter};
use crate::errors::TransferError;
use crate::tracing::spans;

/// One pass through the transfer wizard
///
/// Selecting a value advances the active step. Changing an earlier field
/// never clears later ones; they keep their values and any errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSession {
    values: TransferFormValues,
    active_step: Option<FormStep>,
    submitting: bool,
    succeeded: bool,
}

impl Default for TransferSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferSession {
    pub fn new() -> Self {
        Self {
            values: TransferFormValues::default(),
            active_step: Some(FormStep::From),
            submitting: false,
            succeeded: false,
        }
    }

    pub fn values(&self) -> &TransferFormValues {
        &self.values
    }

    pub fn active_step(&self) -> Option<FormStep> {
        self.active_step
    }

    /// Index of the active step, `-1` when none is open
    pub fn active_step_index(&self) -> i64 {
        self.active_step.map_or(-1, |step| step.index() as i64)
    }

    /// Open a step directly
    pub fn set_active_step(&mut self, step: Option<FormStep>) {
        self.active_step = step;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_success(&self) -> bool {
        self.succeeded
    }

    /// Pick the source vault; its first account is used
    pub fn select_from(&mut self, vault_id: impl Into<String>) {
        self.values.from_vault_id = vault_id.into();
        self.values.from_account_index = 0;
        self.active_step = Some(FormStep::Asset);
    }

    pub fn select_asset(&mut self, asset_id: impl Into<String>) {
        self.values.asset_id = asset_id.into();
        self.active_step = Some(FormStep::Amount);
    }

    /// Store the canonical amount reported by the amount field
    pub fn set_amount(&mut self, canonical: &str) {
        self.values.amount = canonical.to_string();
    }

    pub fn select_to(&mut self, address: impl Into<String>) {
        self.values.to_address = address.into();
        self.active_step = Some(FormStep::Memo);
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.values.memo = Some(memo.into());
    }

    /// Validate and hand the request to the submitter
    ///
    /// Validation failures never reach the submitter. On success the session
    /// is marked as succeeded; on a submitter error the values stay as they
    /// were so the user can retry.
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<TransferRequest, TransferError>
    where
        S: TransferSubmitter + ?Sized,
    {
        let request = match self.values.validate() {
            Ok(request) => request,
            Err(errors) => {
                warn!(invalid_fields = errors.errors().len(), "Transfer form invalid");
                return Err(errors.into());
            }
        };

        let span = spans::submit_transfer(&request.vault_id, &request.asset_id);
        self.submitting = true;
        let outcome = submitter.submit(&request).instrument(span).await;
        self.submitting = false;

        match outcome {
            Ok(()) => {
                info!(amount = %request.amount, to = %request.to, "Transfer submitted");
                self.succeeded = true;
                Ok(request)
            }
            Err(e) => {
                warn!(error = %e, "Transfer failed");
                Err(e.into())
            }
        }
    }

    /// Clear every field and close all steps
    pub fn reset(&mut self) {
        self.values = TransferFormValues::default();
        self.active_step = None;
    }

    /// Start over after a successful submission
    pub fn new_request(&mut self) {
        self.reset();
        self.succeeded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_advances_steps() {
        let mut session = TransferSession::new();
        assert_eq!(session.active_step(), Some(FormStep::From));

        session.select_from("2");
        assert_eq!(session.values().from_account_index, 0);
        assert_eq!(session.active_step(), Some(FormStep::Asset));

        session.select_asset("ETH_TEST5");
        assert_eq!(session.active_step(), Some(FormStep::Amount));

        session.set_amount("0.5");
        assert_eq!(session.active_step(), Some(FormStep::Amount));

        session.select_to("0xabc");
        assert_eq!(session.active_step(), Some(FormStep::Memo));
        assert_eq!(session.active_step_index(), 4);
    }

    #[test]
    fn test_changing_source_keeps_later_fields() {
        let mut session = TransferSession::new();
        session.select_from("1");
        session.select_asset("ETH_TEST5");
        session.set_amount("1.25");
        session.select_from("3");
        assert_eq!(session.values().asset_id, "ETH_TEST5");
        assert_eq!(session.values().amount, "1.25");
    }

    #[test]
    fn test_reset_closes_steps() {
        let mut session = TransferSession::new();
        session.select_from("1");
        session.reset();
        assert_eq!(session.active_step(), None);
        assert_eq!(session.active_step_index(), -1);
        assert_eq!(session.values(), &TransferFormValues::default());
    }
}
