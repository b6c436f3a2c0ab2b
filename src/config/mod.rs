// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the amount field
//!
//! The token price is a required input: there is no module-level default, so
//! every conversion uses a price that was handed in explicitly.
//!
//! # Example: Defaults around an injected price
//!
//! ```rust
//! use transfer_amount::{AmountFieldConfig, TokenPrice};
//!
//! let config = AmountFieldConfig::new(TokenPrice::new(2000.0));
//! assert_eq!(config.precision.usd_fraction_digits, 2);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use transfer_amount::{AmountFieldConfigBuilder, TokenPrice};
//!
//! let config = AmountFieldConfigBuilder::new(TokenPrice::new(0.037624))
//!     .token_max_fraction_digits(4)
//!     .native_currency("eip155:80002", "POL")
//!     .build();
//! assert_eq!(config.native_currency("eip155:80002/slip44:60"), Some("POL".to_string()));
//! ```

use crate::format::DisplayPrecision;
use crate::network::{NativeCurrencies, NativeCurrencyEntry};
use crate::types::tokens::TokenPrice;

pub mod constants;

/// Configuration for an [`AmountField`](crate::AmountField)
///
/// Use [`AmountFieldConfigBuilder`] for a fluent API.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountFieldConfig {
    /// USD per whole token, supplied by the pricing collaborator
    pub price: TokenPrice,

    /// Fraction digits used when rendering floats
    pub precision: DisplayPrecision,

    /// Network-id fragments that identify a native currency
    pub native_currencies: NativeCurrencies,
}

impl AmountFieldConfig {
    /// Default precision and network table around the given price
    pub fn new(price: TokenPrice) -> Self {
        Self {
            price,
            precision: DisplayPrecision::default(),
            native_currencies: NativeCurrencies::default(),
        }
    }

    /// Native currency symbol for a network id, if known
    pub fn native_currency(&self, network_id: &str) -> Option<String> {
        self.native_currencies.resolve(network_id)
    }
}

/// Builder for [`AmountFieldConfig`]
#[derive(Debug, Clone)]
pub struct AmountFieldConfigBuilder {
    config: AmountFieldConfig,
}

impl AmountFieldConfigBuilder {
    pub fn new(price: TokenPrice) -> Self {
        Self {
            config: AmountFieldConfig::new(price),
        }
    }

    /// Exact fraction digits for USD values
    pub fn usd_fraction_digits(mut self, digits: usize) -> Self {
        self.config.precision.usd_fraction_digits = digits;
        self
    }

    /// Maximum fraction digits for token amounts
    pub fn token_max_fraction_digits(mut self, digits: usize) -> Self {
        self.config.precision.token_max_fraction_digits = digits;
        self
    }

    /// Extra precision for amounts in (0, threshold)
    pub fn small_token_precision(mut self, digits: usize, threshold: f64) -> Self {
        self.config.precision.small_token_max_fraction_digits = digits;
        self.config.precision.small_token_threshold = threshold;
        self
    }

    /// Map a network-id fragment to a symbol, ahead of the defaults
    pub fn native_currency(mut self, fragment: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.config
            .native_currencies
            .prepend(NativeCurrencyEntry::new(fragment, symbol));
        self
    }

    /// Drop the built-in fragment table
    ///
    /// EVM ids are still resolved through the chain registry.
    pub fn without_default_networks(mut self) -> Self {
        self.config.native_currencies = NativeCurrencies::empty();
        self
    }

    pub fn build(self) -> AmountFieldConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = AmountFieldConfig::new(TokenPrice::new(1.0));
        assert_eq!(config.precision, DisplayPrecision::default());
        assert_eq!(config.native_currencies, NativeCurrencies::default());
        assert_eq!(config.price, TokenPrice::new(1.0));
    }

    #[test]
    fn test_builder_overrides_precision() {
        let config = AmountFieldConfigBuilder::new(TokenPrice::new(1.0))
            .usd_fraction_digits(3)
            .token_max_fraction_digits(4)
            .small_token_precision(10, 0.001)
            .build();
        assert_eq!(config.precision.usd_fraction_digits, 3);
        assert_eq!(config.precision.token_max_fraction_digits, 4);
        assert_eq!(config.precision.small_token_max_fraction_digits, 10);
        assert_eq!(config.precision.small_token_threshold, 0.001);
    }

    #[test]
    fn test_builder_network_table() {
        let config = AmountFieldConfigBuilder::new(TokenPrice::new(1.0))
            .without_default_networks()
            .native_currency("bip122:", "tBTC")
            .build();
        assert_eq!(config.native_currencies.entries().len(), 1);
        assert_eq!(config.native_currency("bip122:abc"), Some("tBTC".to_string()));
        assert_eq!(config.native_currency("eip155:43113"), Some("AVAX".to_string()));
    }
}
