// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer submission.

/// Errors reported by a [`TransferSubmitter`](crate::form::TransferSubmitter).
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The backend refused the transfer.
    #[error("Transfer rejected: {reason}")]
    Rejected {
        /// Reason given by the backend
        reason: String,
    },

    /// The request never got a definitive answer.
    #[error("Transfer submission failed: {details}")]
    Transport {
        /// Details about the failure
        details: String,
    },
}

impl SubmissionError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        SubmissionError::Rejected {
            reason: reason.into(),
        }
    }

    pub fn transport(details: impl Into<String>) -> Self {
        SubmissionError::Transport {
            details: details.into(),
        }
    }
}
