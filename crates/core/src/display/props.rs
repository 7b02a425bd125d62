//! Property-based tests for display formatting.
//!
//! - Formatting then parsing returns the same numeric value
//! - Formatting never rounds the fraction

use finmov_shared::{CanonicalAmount, Currency};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::format::{FormatOptions, format_amount};
use crate::input::parse_localized;

/// Strategy for signed canonical amounts (-10,000,000,000.00 to 10,000,000,000.00).
fn canonical_amount() -> impl Strategy<Value = CanonicalAmount> {
    (-1_000_000_000_000i64..1_000_000_000_000i64)
        .prop_map(|cents| CanonicalAmount::from_decimal(Decimal::new(cents, 2)))
}

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Ars), Just(Currency::Usd)]
}

fn locale() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("es-AR"), Just("en-US"), Just("es")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* canonical amount, locale and currency, parsing the formatted
    /// text yields the same value, with the symbol on or off.
    #[test]
    fn prop_format_parse_round_trip(
        amount in canonical_amount(),
        currency in currency(),
        locale in locale(),
        show_symbol in any::<bool>(),
    ) {
        let options = FormatOptions::new(locale).unwrap().with_symbol(show_symbol);
        let text = format_amount(&amount, currency, &options);
        let parsed = parse_localized(&text, &options.symbols).unwrap();
        prop_assert_eq!(parsed, Some(amount), "{} did not round-trip", text);
    }

    /// *For any* canonical amount, the shown fraction is a prefix of the
    /// canonical fraction padded with zeros.
    #[test]
    fn prop_fraction_is_truncated(amount in canonical_amount(), digits in 0u32..=4) {
        let options = FormatOptions::new("es-AR")
            .unwrap()
            .with_symbol(false)
            .with_fraction_digits(digits);
        let text = format_amount(&amount, Currency::Ars, &options);

        let canonical = amount.to_string();
        let canonical_fraction = canonical.split_once('.').map_or("", |(_, f)| f);
        let expected: String = canonical_fraction
            .chars()
            .chain(std::iter::repeat('0'))
            .take(digits as usize)
            .collect();
        let shown = text.split_once(',').map_or("", |(_, f)| f);
        prop_assert_eq!(shown, expected.as_str());
    }
}
