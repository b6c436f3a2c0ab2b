// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer form validation.
//!
//! The `Display` text of each variant is the message shown under the field.

use crate::form::FormField;

/// A single failed field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("From is required")]
    FromRequired,

    #[error("Asset is required")]
    AssetRequired,

    #[error("To is required")]
    ToRequired,

    #[error("Amount is required")]
    AmountRequired,

    #[error("Amount must be greater than 0")]
    AmountPositive,
}

impl ValidationError {
    /// The form field this rule belongs to
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::FromRequired => FormField::From,
            ValidationError::AssetRequired => FormField::Asset,
            ValidationError::ToRequired => FormField::To,
            ValidationError::AmountRequired | ValidationError::AmountPositive => FormField::Amount,
        }
    }
}

/// Every rule that failed on a submit attempt, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Transfer form has {} invalid field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// First message for a given field, if it failed
    pub fn message_for(&self, field: FormField) -> Option<String> {
        self.0
            .iter()
            .find(|e| e.field() == field)
            .map(ToString::to_string)
    }
}
