// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Callbacks from the amount field to the surrounding form

/// Receives the field's outputs
///
/// `on_change` always carries a token-denominated canonical string, whatever
/// the display mode. It fires on accepted keystrokes and on MAX, never on
/// focus, blur or mode toggles.
///
/// Closures taking `&str` implement this trait for `on_change` alone:
///
/// ```
/// use transfer_amount::AmountFieldListener;
///
/// let mut stored = String::new();
/// let mut listener = |value: &str| stored = value.to_string();
/// listener.on_change("4990");
/// assert_eq!(stored, "4990");
/// ```
pub trait AmountFieldListener {
    /// The stored amount changed
    fn on_change(&mut self, canonical: &str);

    /// The input gained focus
    fn on_focus(&mut self) {}

    /// The input lost focus
    fn on_blur(&mut self) {}
}

impl<F> AmountFieldListener for F
where
    F: FnMut(&str),
{
    fn on_change(&mut self, canonical: &str) {
        self(canonical)
    }
}
