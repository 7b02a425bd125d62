//! Masking of in-progress keystrokes into a grouped display buffer.
//!
//! The display convention is `.` for thousands and `,` for decimals, with at
//! most two fractional digits. Masking is total: any input reduces to a valid
//! buffer or to the empty string.

/// Thousands separator in display buffers.
pub const GROUP_SEPARATOR: char = '.';

/// Decimal separator in display buffers.
pub const DECIMAL_SEPARATOR: char = ',';

/// Maximum fractional digits kept while typing.
pub const MAX_FRACTION_DIGITS: usize = 2;

/// Digit runs extracted from a raw buffer, before grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DigitRuns {
    /// Integer digits as typed, leading zeros included.
    pub(crate) integer: String,
    /// Fractional digits, already capped.
    pub(crate) fraction: String,
    /// Whether a decimal separator was present.
    pub(crate) has_decimal: bool,
}

/// Masks the raw next value of an amount field.
///
/// # Example
///
/// ```
/// use finmov_core::input::mask_amount;
///
/// assert_eq!(mask_amount("1234567"), "1.234.567");
/// assert_eq!(mask_amount("1234.5"), "1.234,5");
/// assert_eq!(mask_amount(",5"), "0,5");
/// assert_eq!(mask_amount("100,"), "100,");
/// ```
#[must_use]
pub fn mask_amount(raw: &str) -> String {
    let runs = split_digit_runs(raw);
    let integer = strip_leading_zeros(&runs.integer, runs.has_decimal);

    if integer.is_empty() && runs.fraction.is_empty() {
        return String::new();
    }

    let mut masked = group_thousands(integer);
    if runs.has_decimal {
        masked.push(DECIMAL_SEPARATOR);
        masked.push_str(&runs.fraction);
    }
    masked
}

/// Splits a raw buffer into integer and fractional digit runs.
pub(crate) fn split_digit_runs(raw: &str) -> DigitRuns {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = promote_decimal_dot(&compact);
    let ungrouped: String = normalized
        .chars()
        .filter(|&c| c != GROUP_SEPARATOR)
        .collect();

    let (integer_run, fraction_run) = match ungrouped.split_once(DECIMAL_SEPARATOR) {
        Some((integer_run, fraction_run)) => (integer_run, Some(fraction_run)),
        None => (ungrouped.as_str(), None),
    };

    DigitRuns {
        integer: integer_run.chars().filter(char::is_ascii_digit).collect(),
        fraction: fraction_run
            .unwrap_or_default()
            .chars()
            .filter(char::is_ascii_digit)
            .take(MAX_FRACTION_DIGITS)
            .collect(),
        has_decimal: fraction_run.is_some(),
    }
}

/// Rewrites a lone `.` followed by one or two trailing digits into `,`.
///
/// Only applies when no `,` is present, so `1.234` stays a grouped integer
/// while `12.5` becomes `12,5`.
fn promote_decimal_dot(compact: &str) -> String {
    if compact.contains(DECIMAL_SEPARATOR) || compact.matches(GROUP_SEPARATOR).count() != 1 {
        return compact.to_string();
    }

    match compact.split_once(GROUP_SEPARATOR) {
        Some((head, tail))
            if (1..=MAX_FRACTION_DIGITS).contains(&tail.len())
                && tail.bytes().all(|b| b.is_ascii_digit()) =>
        {
            format!("{head}{DECIMAL_SEPARATOR}{tail}")
        }
        _ => compact.to_string(),
    }
}

/// Drops leading zeros, keeping a single `0` for a lone zero or when a
/// decimal separator needs an integer part in front of it.
pub(crate) fn strip_leading_zeros(digits: &str, has_decimal: bool) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if !trimmed.is_empty() {
        trimmed
    } else if has_decimal || !digits.is_empty() {
        "0"
    } else {
        ""
    }
}

/// Inserts a group separator every 3 digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        out.push(ch);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
    }
    out
}
