// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! String transforms between canonical amounts and what the user sees
//!
//! Canonical form is a plain decimal string (`"1000.5"`). Display form adds
//! thousands separators and drops redundant zeros (`"1,000.5"`). None of these
//! functions round except where a fixed number of fraction digits is asked for.

use bigdecimal::{BigDecimal, RoundingMode};
use serde::{Deserialize, Serialize};

/// Fraction-digit limits for rendering floats
///
/// Defaults match what the transfer form shows: USD to the cent, token amounts
/// to 6 places, and up to 8 places for small non-zero amounts that would
/// otherwise render as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPrecision {
    /// Exact fraction digits for USD values
    pub usd_fraction_digits: usize,
    /// Maximum fraction digits for token amounts
    pub token_max_fraction_digits: usize,
    /// Maximum fraction digits for amounts below `small_token_threshold`
    pub small_token_max_fraction_digits: usize,
    /// Amounts in (0, threshold) use the small-amount precision
    pub small_token_threshold: f64,
}

impl Default for DisplayPrecision {
    fn default() -> Self {
        Self {
            usd_fraction_digits: 2,
            token_max_fraction_digits: 6,
            small_token_max_fraction_digits: 8,
            small_token_threshold: 0.01,
        }
    }
}

impl DisplayPrecision {
    /// USD with exactly `usd_fraction_digits` places and separators
    pub fn format_usd(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let fixed = to_fixed(value.abs(), self.usd_fraction_digits);
        with_sign(value, group_fixed(&fixed))
    }

    /// Token amount with separators and up to the configured fraction digits
    pub fn format_token(&self, value: f64) -> String {
        if !value.is_finite() {
            return "0".to_string();
        }
        let magnitude = value.abs();
        let fixed = if magnitude > 0.0 && magnitude < self.small_token_threshold {
            let fixed = to_fixed(magnitude, self.small_token_max_fraction_digits);
            trim_fraction_to(&fixed, 2)
        } else {
            let fixed = to_fixed(magnitude, self.token_max_fraction_digits);
            trim_fraction_to(&fixed, 0)
        };
        with_sign(value, group_fixed(&fixed))
    }
}

/// Canonical amount to display form
///
/// Strips existing separators, collapses leading zeros to at most one,
/// drops trailing fractional zeros and a trailing `.`, then re-inserts
/// separators in the integer part. Empty input stays empty.
///
/// # Examples
///
/// ```
/// use transfer_amount::format::format_for_display;
///
/// assert_eq!(format_for_display("1000.50"), "1,000.5");
/// assert_eq!(format_for_display("00.1"), "0.1");
/// assert_eq!(format_for_display("1."), "1");
/// ```
pub fn format_for_display(canonical: &str) -> String {
    if canonical.is_empty() {
        return String::new();
    }

    let cleaned = canonical.replace(',', "");
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (cleaned.as_str(), None),
    };

    let whole = match whole.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let fraction = fraction.map(|f| f.trim_end_matches('0')).unwrap_or("");

    let grouped = group_thousands(whole);
    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}

/// Typed text to the value stored by the form
///
/// Strips separators, drops leading zeros unless the text starts with `"0."`,
/// and drops a trailing `.`. Empty text and a lone `.` become `"0"` so a
/// cleared field stores a defined zero rather than nothing.
///
/// Text starting with two or more zeros followed by a `.` loses every leading
/// zero (`"00.5"` becomes `".5"`), unlike [`format_for_display`] which keeps
/// one. Downstream parsing treats both the same.
///
/// # Examples
///
/// ```
/// use transfer_amount::format::clean_for_storage;
///
/// assert_eq!(clean_for_storage("1,000,000.50"), "1000000.50");
/// assert_eq!(clean_for_storage("001"), "1");
/// assert_eq!(clean_for_storage("00.5"), ".5");
/// assert_eq!(clean_for_storage(""), "0");
/// ```
pub fn clean_for_storage(display: &str) -> String {
    let mut clean = display.replace(',', "");

    if has_redundant_leading_zero(&clean) && !clean.starts_with("0.") {
        clean = clean.trim_start_matches('0').to_string();
    }

    if clean.is_empty() || clean == "." {
        return "0".to_string();
    }

    if clean.ends_with('.') {
        clean.pop();
    }

    clean
}

/// USD value with two fraction digits and separators: `376244.0` → `"376,244.00"`
pub fn format_usd_amount(value: f64) -> String {
    DisplayPrecision::default().format_usd(value)
}

/// Token amount for the "Available" line: separators, up to 6 fraction digits,
/// up to 8 for amounts in (0, 0.01)
///
/// ```
/// use transfer_amount::format::format_token_amount;
///
/// assert_eq!(format_token_amount(10_000_000.0), "10,000,000");
/// assert_eq!(format_token_amount(0.001234), "0.001234");
/// ```
pub fn format_token_amount(value: f64) -> String {
    DisplayPrecision::default().format_token(value)
}

/// [`format_token_amount`] for decimal text; unparseable text renders `"0"`
pub fn format_token_amount_str(value: &str) -> String {
    match value.replace(',', "").parse::<f64>() {
        Ok(number) => format_token_amount(number),
        Err(_) => "0".to_string(),
    }
}

/// `"1.500"` → `"1.5"`, `"1.000"` → `"1"`, `"1."` → `"1"`; integers untouched
pub fn remove_trailing_zeros(value: &str) -> &str {
    if !value.contains('.') {
        return value;
    }
    value.trim_end_matches('0').trim_end_matches('.')
}

/// Fixed-point rendering with ties rounded away from zero
///
/// Rounds the exact binary value of the float, so `0.125` (exactly
/// representable) becomes `"0.13"` while `1.005` (stored just below) becomes
/// `"1.00"`. Non-finite values render as zero.
///
/// ```
/// use transfer_amount::format::to_fixed;
///
/// assert_eq!(to_fixed(0.125, 2), "0.13");
/// assert_eq!(to_fixed(2.5, 0), "3");
/// assert_eq!(to_fixed(1.005, 2), "1.00");
/// assert_eq!(to_fixed(-0.125, 2), "-0.13");
/// ```
pub fn to_fixed(value: f64, fraction_digits: usize) -> String {
    let Ok(exact) = BigDecimal::try_from(value) else {
        return to_fixed(0.0, fraction_digits);
    };
    let scale = i64::try_from(fraction_digits).unwrap_or(i64::MAX);
    exact
        .with_scale_round(scale, RoundingMode::HalfUp)
        .to_plain_string()
}

/// Insert `,` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn group_fixed(fixed: &str) -> String {
    match fixed.split_once('.') {
        Some((whole, fraction)) => format!("{}.{fraction}", group_thousands(whole)),
        None => group_thousands(fixed),
    }
}

/// Trim trailing fractional zeros but keep at least `min_digits`
fn trim_fraction_to(fixed: &str, min_digits: usize) -> String {
    let Some((whole, fraction)) = fixed.split_once('.') else {
        return fixed.to_string();
    };
    let trimmed = fraction.trim_end_matches('0');
    let keep = trimmed.len().max(min_digits.min(fraction.len()));
    if keep == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{}", &fraction[..keep])
    }
}

fn with_sign(value: f64, formatted: String) -> String {
    if value < 0.0 && formatted.chars().any(|c| matches!(c, '1'..='9')) {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// One or more `0`s followed by another digit at the start
fn has_redundant_leading_zero(value: &str) -> bool {
    let zeros = value.len() - value.trim_start_matches('0').len();
    zeros > 1
        || (zeros == 1
            && value[zeros..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit()))
}
