// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across transfer-amount.
//!
//! Newtype wrappers keep base-unit integers, human-unit amounts, prices and
//! USD values from being mixed up.

pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
