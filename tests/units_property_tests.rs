// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for base-unit conversion and display formatting
//!
//! These tests use proptest to check the exactness and idempotence rules
//! across arbitrary amounts and precisions.

use alloy_primitives::U256;
use proptest::prelude::*;
use transfer_amount::format::{clean_for_storage, format_for_display};
use transfer_amount::{units, TokenAmount, TokenDecimals};

// Helper to generate arbitrary U256 values across the full range
fn arb_u256() -> impl Strategy<Value = U256> {
    prop_oneof![
        any::<u64>().prop_map(U256::from),
        any::<u128>().prop_map(U256::from),
        any::<[u64; 4]>().prop_map(U256::from_limbs),
    ]
}

// Helper to generate plain decimal text: digits with an optional fraction
fn arb_decimal_text() -> impl Strategy<Value = String> {
    ("[0-9]{1,12}", proptest::option::of("[0-9]{0,10}")).prop_map(|(whole, fraction)| {
        match fraction {
            Some(fraction) => format!("{whole}.{fraction}"),
            None => whole,
        }
    })
}

proptest! {
    /// Property: base units survive a trip through the decimal string
    #[test]
    fn prop_base_unit_round_trip(n in arb_u256(), d in 0u8..=30) {
        let decimals = TokenDecimals::new(d);
        let text = units::from_base_units(n, decimals);
        prop_assert_eq!(units::to_base_units(&text, decimals).unwrap(), n);
    }

    /// Property: canonical strings never carry trailing zeros or separators
    #[test]
    fn prop_canonical_string_is_trimmed(n in arb_u256(), d in 1u8..=30) {
        let text = units::from_base_units(n, TokenDecimals::new(d));
        prop_assert!(!text.contains(','));
        prop_assert!(!text.ends_with('.'));
        if text.contains('.') {
            prop_assert!(!text.ends_with('0'), "trailing zero in {}", text);
        }
    }

    /// Property: available amount is balance minus fee, floored at zero
    #[test]
    fn prop_available_floor(balance in any::<u128>(), fee in any::<u128>()) {
        let available = units::available_amount(
            Some(TokenAmount::from(U256::from(balance))),
            Some(TokenAmount::from(U256::from(fee))),
        )
        .unwrap();

        let expected = balance.saturating_sub(fee);
        prop_assert_eq!(available.as_u256(), U256::from(expected));
    }

    /// Property: formatting an already formatted value changes nothing
    #[test]
    fn prop_display_format_is_idempotent(text in arb_decimal_text()) {
        let once = format_for_display(&text);
        prop_assert_eq!(format_for_display(&once), once.clone());
    }

    /// Property: display and storage forms agree on the base-unit value
    #[test]
    fn prop_display_and_storage_agree(text in arb_decimal_text(), d in 0u8..=18) {
        let decimals = TokenDecimals::new(d);
        let displayed = format_for_display(&text).replace(',', "");
        let stored = clean_for_storage(&text);
        prop_assert_eq!(
            units::to_base_units(&displayed, decimals).unwrap(),
            units::to_base_units(&stored, decimals).unwrap()
        );
    }

    /// Property: permissive parsing never fails, it degrades to zero
    #[test]
    fn prop_parse_balance_never_panics(text in "\\PC{0,24}") {
        let _ = units::parse_balance(&text, TokenDecimals::STANDARD);
    }
}

#[test]
fn test_known_conversions() {
    let wei = |s: &str| U256::from_str_radix(s, 10).unwrap();

    assert_eq!(
        units::from_base_units(wei("1500000000000000000"), TokenDecimals::STANDARD),
        "1.5"
    );
    assert_eq!(
        units::from_base_units(wei("1000000000000000000"), TokenDecimals::STANDARD),
        "1"
    );
    assert_eq!(
        units::to_base_units("3333.67", TokenDecimals::STANDARD).unwrap(),
        wei("3333670000000000000000")
    );
}

#[test]
fn test_display_examples() {
    assert_eq!(format_for_display("1000"), "1,000");
    assert_eq!(format_for_display("1000.50"), "1,000.5");
    assert_eq!(format_for_display("1.00"), "1");
    assert_eq!(format_for_display("1."), "1");

    assert_eq!(clean_for_storage("001"), "1");
    assert_eq!(clean_for_storage("00.5"), ".5");
    assert_eq!(clean_for_storage(""), "0");
    assert_eq!(clean_for_storage("."), "0");
}
