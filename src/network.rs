// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Native currency resolution from network identifiers
//!
//! Network ids are CAIP-style strings such as `eip155:43113/slip44:60`. The
//! USD toggle on the amount field is only offered when the network resolves
//! to a known native currency.

use alloy_chains::NamedChain;
use serde::{Deserialize, Serialize};

/// A network-id fragment and the native currency symbol it implies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrencyEntry {
    /// Substring looked for in the network id
    pub fragment: String,
    /// Symbol of the fee-paying asset, e.g. `"AVAX"`
    pub symbol: String,
}

impl NativeCurrencyEntry {
    pub fn new(fragment: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            symbol: symbol.into(),
        }
    }
}

/// Ordered fragment table; the first matching entry wins
///
/// # Examples
///
/// ```
/// use transfer_amount::NativeCurrencies;
///
/// let table = NativeCurrencies::default();
/// assert_eq!(table.resolve("eip155:43113/slip44:60"), Some("AVAX".to_string()));
/// assert_eq!(table.resolve("bip122:000000000933ea01ad0ee984209779ba"), Some("BTC".to_string()));
/// assert_eq!(table.resolve("cosmos:unknown-1"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrencies {
    entries: Vec<NativeCurrencyEntry>,
}

impl Default for NativeCurrencies {
    fn default() -> Self {
        Self {
            entries: vec![
                NativeCurrencyEntry::new("eip155:11155111", "ETH"),
                NativeCurrencyEntry::new("eip155:43113", "AVAX"),
                NativeCurrencyEntry::new("bip122:", "BTC"),
            ],
        }
    }
}

impl NativeCurrencies {
    /// An empty table; only the EVM chain registry is consulted
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry that takes precedence over existing ones
    pub fn prepend(&mut self, entry: NativeCurrencyEntry) {
        self.entries.insert(0, entry);
    }

    pub fn entries(&self) -> &[NativeCurrencyEntry] {
        &self.entries
    }

    /// Native currency symbol for a network id, if known
    ///
    /// Table fragments are checked first. An `eip155:<chain id>` id not in
    /// the table falls back to the chain registry.
    pub fn resolve(&self, network_id: &str) -> Option<String> {
        if network_id.is_empty() {
            return None;
        }

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| !e.fragment.is_empty() && network_id.contains(e.fragment.as_str()))
        {
            return Some(entry.symbol.clone());
        }

        let symbol = evm_chain_id(network_id)
            .and_then(|id| NamedChain::try_from(id).ok())
            .and_then(|chain| chain.native_currency_symbol())
            .map(str::to_string);

        if symbol.is_none() {
            tracing::debug!(network_id, "No native currency for network");
        }
        symbol
    }
}

/// Chain id from `eip155:<id>` or `eip155:<id>/...`
fn evm_chain_id(network_id: &str) -> Option<u64> {
    let rest = network_id.strip_prefix("eip155:")?;
    let id = rest.split(['/', ':']).next()?;
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fragments() {
        let table = NativeCurrencies::default();
        assert_eq!(table.resolve("eip155:11155111/slip44:60"), Some("ETH".into()));
        assert_eq!(table.resolve("eip155:43113/slip44:60"), Some("AVAX".into()));
        assert_eq!(
            table.resolve("bip122:000000000933ea01ad0ee984209779ba/slip44:1"),
            Some("BTC".into())
        );
    }

    #[test]
    fn test_unknown_networks() {
        let table = NativeCurrencies::default();
        assert_eq!(table.resolve(""), None);
        assert_eq!(table.resolve("solana:devnet"), None);
        assert_eq!(table.resolve("eip155:not-a-number"), None);
    }

    #[test]
    fn test_registry_fallback_for_evm_chains() {
        let table = NativeCurrencies::empty();
        assert_eq!(table.resolve("eip155:1/slip44:60"), Some("ETH".into()));
        assert_eq!(table.resolve("eip155:43114"), Some("AVAX".into()));
    }

    #[test]
    fn test_prepended_entry_wins() {
        let mut table = NativeCurrencies::default();
        table.prepend(NativeCurrencyEntry::new("eip155:43113", "tAVAX"));
        assert_eq!(table.resolve("eip155:43113/slip44:60"), Some("tAVAX".into()));
    }

    #[test]
    fn test_evm_chain_id() {
        assert_eq!(evm_chain_id("eip155:43113/slip44:60"), Some(43113));
        assert_eq!(evm_chain_id("eip155:1"), Some(1));
        assert_eq!(evm_chain_id("bip122:abc"), None);
    }
}
