// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for transfer-amount integration tests
//!
//! Provides recording implementations of the listener and submitter traits
//! so tests can observe what the field and the session emit.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use transfer_amount::{
    AmountField, AmountFieldConfig, AmountFieldListener, AmountFieldProps, SubmissionError,
    TokenAmount, TokenDecimals, TokenPrice, TransferRequest, TransferSubmitter,
};

/// Price used across tests, USD per AVAX
pub const PRICE: TokenPrice = TokenPrice::new(0.037624);

/// Avalanche Fuji, resolves to AVAX
pub const AVAX_NETWORK: &str = "eip155:43113/slip44:60";

/// Records every callback the field makes
#[derive(Debug, Default)]
pub struct RecordingListener {
    pub changes: Vec<String>,
    pub focus_count: usize,
    pub blur_count: usize,
}

impl RecordingListener {
    pub fn last_change(&self) -> Option<&str> {
        self.changes.last().map(String::as_str)
    }
}

impl AmountFieldListener for RecordingListener {
    fn on_change(&mut self, canonical: &str) {
        self.changes.push(canonical.to_string());
    }

    fn on_focus(&mut self) {
        self.focus_count += 1;
    }

    fn on_blur(&mut self) {
        self.blur_count += 1;
    }
}

/// Whole tokens to base units at 18 decimals
pub fn tokens(whole: u64) -> TokenAmount {
    format!("{whole}000000000000000000")
        .parse()
        .expect("valid base units")
}

/// 18-decimal AVAX with 5000 balance and a 10 fee
pub fn avax_props() -> AmountFieldProps {
    AmountFieldProps::new(TokenDecimals::STANDARD)
        .with_balance(tokens(5000))
        .with_fee(tokens(10))
        .with_network_id(AVAX_NETWORK)
}

pub fn avax_field() -> AmountField<RecordingListener> {
    AmountField::new(
        AmountFieldConfig::new(PRICE),
        avax_props(),
        RecordingListener::default(),
    )
}

/// Submitter that records requests and optionally fails
#[derive(Debug, Default)]
pub struct MockSubmitter {
    requests: Mutex<Vec<TransferRequest>>,
    reject_with: Option<String>,
}

impl MockSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every request with the given reason
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reject_with: Some(reason.into()),
        }
    }

    pub fn requests(&self) -> Vec<TransferRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransferSubmitter for MockSubmitter {
    async fn submit(&self, request: &TransferRequest) -> Result<(), SubmissionError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reject_with {
            Some(reason) => Err(SubmissionError::rejected(reason.clone())),
            None => Ok(()),
        }
    }
}
