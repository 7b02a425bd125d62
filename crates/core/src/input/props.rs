//! Property-based tests for amount input handling.
//!
//! - Masking is idempotent
//! - Masked buffers keep at most one decimal separator and two fraction digits
//! - Every non-empty masked buffer parses
//! - Caret anchoring is by digit count, ignoring stripped leading zeros

use proptest::prelude::*;

use super::caret::{apply_edit, caret_from_digit_position, count_digits_before_caret};
use super::mask::{DECIMAL_SEPARATOR, mask_amount};
use super::parse::parse_display;

/// Strategy for raw keystroke buffers, noise included.
fn raw_input() -> impl Strategy<Value = String> {
    "[0-9.,a-z $\\-]{0,24}"
}

/// Strategy for integer digit runs without leading zeros.
fn integer_digits() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,11}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// *For any* raw buffer, masking twice equals masking once.
    #[test]
    fn prop_mask_is_idempotent(raw in raw_input()) {
        let once = mask_amount(&raw);
        prop_assert_eq!(mask_amount(&once), once);
    }

    /// *For any* raw buffer, the masked buffer has at most one decimal
    /// separator and at most two digits after it.
    #[test]
    fn prop_mask_caps_fraction(raw in raw_input()) {
        let masked = mask_amount(&raw);
        prop_assert!(masked.matches(DECIMAL_SEPARATOR).count() <= 1);
        if let Some((_, fraction)) = masked.split_once(DECIMAL_SEPARATOR) {
            prop_assert!(fraction.len() <= 2, "fraction too long in {}", masked);
        }
    }

    /// *For any* raw buffer, a non-empty masked buffer is accepted by the
    /// parser and an empty one parses to no value.
    #[test]
    fn prop_masked_buffer_parses(raw in raw_input()) {
        let masked = mask_amount(&raw);
        let parsed = parse_display(&masked);
        prop_assert!(parsed.is_ok(), "{} was rejected", masked);
        prop_assert_eq!(parsed.unwrap().is_none(), masked.is_empty());
    }

    /// *For any* digit run and caret, the caret stays after the same digit
    /// once grouping separators are inserted.
    #[test]
    fn prop_caret_is_digit_anchored(digits in integer_digits(), caret_seed in 0usize..16) {
        let caret = caret_seed.min(digits.len());
        let edit = apply_edit(&digits, caret);

        prop_assert_eq!(
            count_digits_before_caret(&edit.buffer, edit.caret),
            count_digits_before_caret(&digits, caret)
        );
    }

    /// *For any* masked buffer, resolving a digit position and counting back
    /// gives the same digit count.
    #[test]
    fn prop_digit_position_round_trips(raw in raw_input(), n in 0usize..20) {
        let masked = mask_amount(&raw);
        let total = count_digits_before_caret(&masked, usize::MAX);
        let offset = caret_from_digit_position(&masked, n);

        prop_assert!(offset <= masked.chars().count());
        prop_assert_eq!(count_digits_before_caret(&masked, offset), n.min(total));
    }

    /// *For any* edit, the caret stays inside the masked buffer.
    #[test]
    fn prop_caret_within_bounds(raw in raw_input(), caret in 0usize..32) {
        let edit = apply_edit(&raw, caret);
        prop_assert!(edit.caret <= edit.buffer.chars().count());
    }

    /// *For any* digit run typed behind leading zeros, the caret stays after
    /// the same significant digit once the zeros are dropped.
    #[test]
    fn prop_caret_skips_stripped_zeros(
        zeros in 1usize..4,
        digits in integer_digits(),
        caret_seed in 0usize..16,
    ) {
        let raw = format!("{}{digits}", "0".repeat(zeros));
        let caret = (zeros + caret_seed).min(raw.len());
        let edit = apply_edit(&raw, caret);

        prop_assert_eq!(edit.buffer.replace('.', ""), digits);
        prop_assert_eq!(count_digits_before_caret(&edit.buffer, edit.caret), caret - zeros);
    }
}
