// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known constants
//!
//! Nothing in the library reads these implicitly. They exist for the demo
//! binary and for tests that want realistic values.

use crate::types::tokens::{TokenDecimals, TokenPrice};

/// Demo token price (USD per token) used when no pricing feed is wired up
pub const DEMO_PRICE_USD: TokenPrice = TokenPrice::new(0.037624);

/// Demo network: Avalanche Fuji C-Chain
pub const DEMO_NETWORK_ID: &str = "eip155:43113/slip44:60";

/// Decimals of the demo asset
pub const DEMO_DECIMALS: TokenDecimals = TokenDecimals::STANDARD;
