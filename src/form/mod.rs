// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer form model
//!
//! The values the wizard collects (From vault → Asset → Amount → To → Memo),
//! their validation rules, and the request handed to the submission endpoint.

mod session;
mod submit;

pub use session::TransferSession;
pub use submit::TransferSubmitter;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationErrors};
use crate::types::tokens::{NormalizedAmount, TokenAmount};

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStep {
    From,
    Asset,
    Amount,
    To,
    Memo,
}

impl FormStep {
    pub const ALL: [FormStep; 5] = [
        FormStep::From,
        FormStep::Asset,
        FormStep::Amount,
        FormStep::To,
        FormStep::Memo,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Following step; `None` after Memo
    pub fn next(self) -> Option<FormStep> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

/// Fields that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    From,
    Asset,
    Amount,
    To,
    Memo,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormField::From => "from",
            FormField::Asset => "asset",
            FormField::Amount => "amount",
            FormField::To => "to",
            FormField::Memo => "memo",
        };
        f.write_str(name)
    }
}

/// Raw form state
///
/// `from_account_index` is `-1` until a vault is picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferFormValues {
    pub from_vault_id: String,
    pub from_account_index: i64,
    pub asset_id: String,
    pub to_address: String,
    /// Canonical token-denominated amount
    pub amount: String,
    pub memo: Option<String>,
}

impl Default for TransferFormValues {
    fn default() -> Self {
        Self {
            from_vault_id: String::new(),
            from_account_index: -1,
            asset_id: String::new(),
            to_address: String::new(),
            amount: String::new(),
            memo: Some(String::new()),
        }
    }
}

impl TransferFormValues {
    /// First failed rule for one field, if any
    ///
    /// ```
    /// use transfer_amount::{FormField, TransferFormValues, ValidationError};
    ///
    /// let mut values = TransferFormValues::default();
    /// assert_eq!(values.validate_field(FormField::Amount), Some(ValidationError::AmountRequired));
    /// values.amount = "0".into();
    /// assert_eq!(values.validate_field(FormField::Amount), Some(ValidationError::AmountPositive));
    /// values.amount = "1,000.5".into();
    /// assert_eq!(values.validate_field(FormField::Amount), None);
    /// ```
    pub fn validate_field(&self, field: FormField) -> Option<ValidationError> {
        match field {
            FormField::From => (self.from_vault_id.is_empty() || self.from_account_index < 0)
                .then_some(ValidationError::FromRequired),
            FormField::Asset => self
                .asset_id
                .is_empty()
                .then_some(ValidationError::AssetRequired),
            FormField::To => self
                .to_address
                .is_empty()
                .then_some(ValidationError::ToRequired),
            FormField::Amount => validate_amount(&self.amount),
            FormField::Memo => None,
        }
    }

    /// Check every field and build the request
    pub fn validate(&self) -> Result<TransferRequest, ValidationErrors> {
        let errors: Vec<ValidationError> = [
            FormField::From,
            FormField::Asset,
            FormField::Amount,
            FormField::To,
            FormField::Memo,
        ]
        .into_iter()
        .filter_map(|field| self.validate_field(field))
        .collect();

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        Ok(TransferRequest {
            vault_id: self.from_vault_id.clone(),
            account_index: self.from_account_index.unsigned_abs(),
            asset_id: self.asset_id.clone(),
            amount: self.amount.clone(),
            to: self.to_address.clone(),
            memo: self.memo.clone().unwrap_or_default(),
        })
    }
}

fn validate_amount(amount: &str) -> Option<ValidationError> {
    if amount.is_empty() {
        return Some(ValidationError::AmountRequired);
    }
    if !NormalizedAmount::parse_or_zero(amount).is_positive() {
        return Some(ValidationError::AmountPositive);
    }
    None
}

/// Structured request accepted by the transfer endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub vault_id: String,
    pub account_index: u64,
    pub asset_id: String,
    /// Canonical token-denominated amount
    pub amount: String,
    pub to: String,
    pub memo: String,
}

/// Balance of one account in a vault, in base units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub account_index: i64,
    pub balance: TokenAmount,
}

/// Balance of the selected account; `None` before an account is picked
pub fn select_balance(balances: &[AccountBalance], account_index: i64) -> Option<TokenAmount> {
    if account_index < 0 {
        return None;
    }
    balances
        .iter()
        .find(|b| b.account_index == account_index)
        .map(|b| b.balance)
}
