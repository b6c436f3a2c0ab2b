// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Amount value model
//!
//! [`AmountField`] keeps one text input consistent with the amount the form
//! stores. The stored value is always a canonical decimal string in the
//! asset's own unit; what the input shows depends on focus, on the
//! token/USD display mode, and on the price.
//!
//! ```
//! use transfer_amount::{AmountField, AmountFieldConfig, AmountFieldProps, BlurCause, TokenPrice};
//!
//! let mut stored = String::new();
//! let props = AmountFieldProps::new(transfer_amount::TokenDecimals::STANDARD)
//!     .with_balance("5000000000000000000000".parse().unwrap())
//!     .with_fee("10000000000000000000".parse().unwrap())
//!     .with_network_id("eip155:43113/slip44:60");
//! let mut field = AmountField::new(
//!     AmountFieldConfig::new(TokenPrice::new(0.037624)),
//!     props,
//!     |value: &str| stored = value.to_string(),
//! );
//!
//! field.on_max();
//! assert_eq!(field.display_value(), "4,990");
//! field.on_toggle_mode();
//! assert_eq!(field.display_value(), "187.74");
//! drop(field);
//! assert_eq!(stored, "4990");
//! ```

mod listener;
mod state;

pub use listener::AmountFieldListener;
pub use state::{BlurCause, DisplayMode, FieldState};

use serde::{Deserialize, Serialize};

use crate::config::AmountFieldConfig;
use crate::format::{clean_for_storage, format_for_display};
use crate::tracing::spans;
use crate::types::tokens::{NormalizedAmount, TokenAmount, TokenDecimals, TokenPrice, UsdValue};
use crate::units;

/// External inputs to the field, replaced wholesale as queries resolve
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmountFieldProps {
    /// Spendable balance in base units; `None` while loading or failed
    pub balance: Option<TokenAmount>,
    /// Network fee in base units; `None` while loading or failed
    pub fee: Option<TokenAmount>,
    pub decimals: TokenDecimals,
    /// Network of the selected asset, for native-currency resolution
    pub network_id: Option<String>,
}

impl AmountFieldProps {
    pub fn new(decimals: TokenDecimals) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }

    pub fn with_balance(mut self, balance: TokenAmount) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn with_fee(mut self, fee: TokenAmount) -> Self {
        self.fee = Some(fee);
        self
    }

    pub fn with_network_id(mut self, network_id: impl Into<String>) -> Self {
        self.network_id = Some(network_id.into());
        self
    }
}

/// The amount input and its canonical value
///
/// All handlers run to completion synchronously; the field is the only owner
/// of its display string, focus flag and mode.
#[derive(Debug)]
pub struct AmountField<L> {
    config: AmountFieldConfig,
    props: AmountFieldProps,
    value: String,
    display: String,
    state: FieldState,
    listener: L,
}

impl<L: AmountFieldListener> AmountField<L> {
    /// An empty, unfocused field in token mode
    pub fn new(config: AmountFieldConfig, props: AmountFieldProps, listener: L) -> Self {
        Self {
            config,
            props,
            value: String::new(),
            display: String::new(),
            state: FieldState::default(),
            listener,
        }
    }

    /// Canonical, token-denominated value as last stored
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text the input currently shows
    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn mode(&self) -> DisplayMode {
        self.state.mode()
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    pub fn props(&self) -> &AmountFieldProps {
        &self.props
    }

    pub fn config(&self) -> &AmountFieldConfig {
        &self.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Apply a value set by the form itself (reset, restored draft)
    ///
    /// The listener is not notified. While unfocused the display follows.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if !self.is_focused() {
            self.display = self.render_unfocused();
        }
    }

    pub fn set_balance(&mut self, balance: Option<TokenAmount>) {
        self.props.balance = balance;
    }

    pub fn set_fee(&mut self, fee: Option<TokenAmount>) {
        self.props.fee = fee;
    }

    pub fn set_decimals(&mut self, decimals: TokenDecimals) {
        self.props.decimals = decimals;
    }

    pub fn set_network_id(&mut self, network_id: Option<String>) {
        self.props.network_id = network_id;
    }

    /// Replace the price; an unfocused USD display is re-rendered
    pub fn set_price(&mut self, price: TokenPrice) {
        self.config.price = price;
        if !self.is_focused() {
            self.display = self.render_unfocused();
        }
    }

    /// Non-empty and greater than zero
    pub fn has_value(&self) -> bool {
        !self.value.is_empty() && NormalizedAmount::parse_or_zero(&self.value).is_positive()
    }

    /// Native currency of the active network, if it can be resolved
    pub fn native_currency(&self) -> Option<String> {
        self.props
            .network_id
            .as_deref()
            .and_then(|id| self.config.native_currency(id))
    }

    /// Whether the token/USD toggle is enabled
    pub fn can_toggle_mode(&self) -> bool {
        self.has_value() && self.native_currency().is_some()
    }

    /// Whether the MAX control is enabled
    pub fn can_max(&self) -> bool {
        self.props.balance.is_some() && self.props.fee.is_some()
    }

    /// Balance minus fee, floored at zero; `None` until both are known
    pub fn available(&self) -> Option<TokenAmount> {
        units::available_amount(self.props.balance, self.props.fee)
    }

    /// USD value of [`available`](Self::available)
    pub fn available_usd(&self) -> Option<UsdValue> {
        self.available().map(|amount| {
            self.config
                .price
                .value_of(amount.normalize(self.props.decimals))
        })
    }

    /// `"$ 187.74 ≈ 4,990 AVAX"`, or `"-- AVAX"` while unavailable
    pub fn available_summary(&self, symbol: &str) -> String {
        let (Some(amount), Some(usd)) = (self.available(), self.available_usd()) else {
            return format!("-- {symbol}");
        };
        let precision = &self.config.precision;
        format!(
            "$ {} ≈ {} {symbol}",
            precision.format_usd(usd.as_f64()),
            precision.format_token(amount.normalize(self.props.decimals).as_f64()),
        )
    }

    /// `"10 AVAX"`, or `"--"` while the fee is unknown
    pub fn fee_summary(&self, symbol: &str) -> String {
        match self.props.fee {
            Some(fee) => format!("{} {symbol}", fee.to_decimal_string(self.props.decimals)),
            None => "--".to_string(),
        }
    }

    /// Input gained focus: show the unformatted value for editing
    pub fn on_focus(&mut self) {
        self.state = self.state.focus();
        if !self.value.is_empty() {
            self.display = match self.mode() {
                DisplayMode::Token => self.value.clone(),
                DisplayMode::Usd => self.usd_fixed(),
            };
        }
        self.listener.on_focus();
    }

    /// Input text changed; returns whether the keystroke was accepted
    ///
    /// Thousands separators are ignored. Anything other than digits and a
    /// single `.` rejects the keystroke and leaves the field unchanged. In
    /// USD mode the typed number is converted to tokens before it is stored.
    pub fn on_change(&mut self, raw: &str) -> bool {
        let span = spans::amount_field_change(self.mode(), raw.len());
        let _guard = span.enter();

        let stripped = raw.replace(',', "");
        if !is_amount_text(&stripped) {
            tracing::debug!(input = raw, "Rejected amount keystroke");
            return false;
        }

        self.display = raw.to_string();
        let canonical = match self.mode() {
            DisplayMode::Token => clean_for_storage(&stripped),
            DisplayMode::Usd => self.tokens_for_usd(UsdValue::parse_or_zero(&stripped)),
        };
        self.store(canonical);
        true
    }

    /// Input lost focus
    ///
    /// A blur towards the submit control only clears the focus flag; any
    /// other blur re-renders the display from the stored value.
    pub fn on_blur(&mut self, cause: BlurCause) {
        self.state = self.state.blur();
        if cause == BlurCause::Elsewhere {
            self.display = self.render_unfocused();
        }
        self.listener.on_blur();
    }

    /// Fill the largest spendable amount; returns `false` when MAX is disabled
    pub fn on_max(&mut self) -> bool {
        let span = spans::amount_field_max(self.mode(), self.props.decimals);
        let _guard = span.enter();

        let Some(max) = self.available() else {
            tracing::debug!("MAX ignored while balance or fee is unavailable");
            return false;
        };

        let tokens = max.to_decimal_string(self.props.decimals);
        self.store(tokens);
        self.display = match (self.mode(), self.is_focused()) {
            (DisplayMode::Usd, _) => self.usd_fixed(),
            (DisplayMode::Token, true) => self.value.clone(),
            (DisplayMode::Token, false) => format_for_display(&self.value),
        };
        true
    }

    /// Switch between token and USD display; returns `false` when disabled
    ///
    /// The stored value is untouched.
    pub fn on_toggle_mode(&mut self) -> bool {
        let span = spans::amount_field_toggle(self.mode());
        let _guard = span.enter();

        if !self.can_toggle_mode() {
            tracing::debug!(
                network_id = self.props.network_id.as_deref().unwrap_or(""),
                "Mode toggle ignored without a value and a known native currency"
            );
            return false;
        }

        self.state = self.state.toggle_mode();
        self.display = match self.mode() {
            DisplayMode::Usd => self.usd_fixed(),
            DisplayMode::Token => format_for_display(&self.value),
        };
        true
    }

    /// Back to an empty, unfocused field in token mode
    pub fn reset(&mut self) {
        self.value.clear();
        self.display.clear();
        self.state = FieldState::default();
    }

    fn store(&mut self, canonical: String) {
        self.value = canonical;
        self.listener.on_change(&self.value);
    }

    fn render_unfocused(&self) -> String {
        if !self.has_value() {
            return String::new();
        }
        match self.mode() {
            DisplayMode::Token => format_for_display(&self.value),
            DisplayMode::Usd => self.usd_fixed(),
        }
    }

    /// Stored value in USD, fixed to the configured digits
    fn usd_fixed(&self) -> String {
        self.config
            .price
            .value_of(NormalizedAmount::parse_or_zero(&self.value))
            .to_fixed(self.config.precision.usd_fraction_digits)
    }

    /// Canonical token string for a USD amount; zero when the price is unusable
    fn tokens_for_usd(&self, usd: UsdValue) -> String {
        let tokens = self.config.price.tokens_for(usd).unwrap_or_else(|| {
            tracing::warn!(price = %self.config.price, "Unusable price, storing 0");
            NormalizedAmount::ZERO
        });
        tokens
            .to_base_units(self.props.decimals)
            .to_decimal_string(self.props.decimals)
    }
}

/// Digits and at most one `.`
fn is_amount_text(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || c == '.') && text.matches('.').count() <= 1
}
