//! Caret re-anchoring across masking passes.
//!
//! Carets are character offsets. Positions are carried over by counting the
//! digits in front of the caret rather than by raw offset, so separators
//! appearing or disappearing around the caret never move it across a digit.

use super::mask::{
    DECIMAL_SEPARATOR, GROUP_SEPARATOR, mask_amount, split_digit_runs, strip_leading_zeros,
};

/// Result of one masking pass over an edited field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedEdit {
    /// Masked display buffer.
    pub buffer: String,
    /// Caret offset (in characters) inside `buffer`.
    pub caret: usize,
}

/// Counts the digits in `buffer[0..caret]`.
///
/// A caret past the end counts every digit.
#[must_use]
pub fn count_digits_before_caret(buffer: &str, caret: usize) -> usize {
    buffer
        .chars()
        .take(caret)
        .filter(char::is_ascii_digit)
        .count()
}

/// Returns the offset right after the `digits`-th digit of `buffer`.
///
/// Zero digits maps to offset 0; asking for more digits than the buffer holds
/// maps to the buffer length.
#[must_use]
pub fn caret_from_digit_position(buffer: &str, digits: usize) -> usize {
    if digits == 0 {
        return 0;
    }

    let mut seen = 0;
    for (offset, ch) in buffer.chars().enumerate() {
        if ch.is_ascii_digit() {
            seen += 1;
            if seen == digits {
                return offset + 1;
            }
        }
    }
    buffer.chars().count()
}

/// Masks `raw` and moves the caret to the matching spot in the new buffer.
///
/// `caret` is the host's caret inside `raw`, i.e. right after the keystroke
/// that produced it.
///
/// # Example
///
/// ```
/// use finmov_core::input::apply_edit;
///
/// let edit = apply_edit("100,", 4);
/// assert_eq!(edit.buffer, "100,");
/// assert_eq!(edit.caret, 4);
/// ```
#[must_use]
pub fn apply_edit(raw: &str, caret: usize) -> MaskedEdit {
    let buffer = mask_amount(raw);
    let caret = recalculate_caret(raw, caret, &buffer);
    MaskedEdit { buffer, caret }
}

/// Computes the caret inside `masked` for a caret at `raw_caret` in `raw`.
#[must_use]
pub fn recalculate_caret(raw: &str, raw_caret: usize, masked: &str) -> usize {
    let masked_len = masked.chars().count();
    if masked_len == 0 {
        return 0;
    }

    let raw_caret = raw_caret.min(raw.chars().count());
    let runs = split_digit_runs(raw);
    let mut digits = count_digits_before_caret(raw, raw_caret);

    // Leading zeros dropped by masking are the first digits of the raw buffer.
    let stripped = runs
        .integer
        .len()
        .saturating_sub(strip_leading_zeros(&runs.integer, runs.has_decimal).len());
    digits -= digits.min(stripped);

    // Masking synthesizes the `0` in "0,5" when no integer digit was typed.
    if masked.starts_with("0,") && runs.integer.is_empty() {
        digits += 1;
    }

    let mut caret = caret_from_digit_position(masked, digits);
    if typed_separator(raw, raw_caret) && masked.chars().nth(caret).is_some_and(is_separator) {
        caret += 1;
    }
    caret.min(masked_len)
}

fn is_separator(ch: char) -> bool {
    ch == GROUP_SEPARATOR || ch == DECIMAL_SEPARATOR
}

/// Whether the character right before the caret is a separator keystroke.
fn typed_separator(raw: &str, raw_caret: usize) -> bool {
    raw_caret
        .checked_sub(1)
        .and_then(|index| raw.chars().nth(index))
        .is_some_and(is_separator)
}
