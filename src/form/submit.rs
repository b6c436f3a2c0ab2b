// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Seam to the transfer submission endpoint

use async_trait::async_trait;

use super::TransferRequest;
use crate::errors::SubmissionError;

/// Accepts a validated transfer request and resolves or fails
///
/// Implementations talk to the backend; the form only needs to know whether
/// the request went through.
#[async_trait]
pub trait TransferSubmitter: Send + Sync {
    async fn submit(&self, request: &TransferRequest) -> Result<(), SubmissionError>;
}
