//! Parsing of display buffers into canonical amounts.
//!
//! Accepted grammar (display convention):
//! `^-?(\d{1,3}(?:\.\d{3})*|\d+)(?:,\d{0,2})?$`

use std::str::FromStr;

use finmov_shared::{CanonicalAmount, EngineError, EngineResult};
use rust_decimal::Decimal;
use tracing::trace;

use super::mask::{DECIMAL_SEPARATOR, GROUP_SEPARATOR, MAX_FRACTION_DIGITS};
use crate::display::LocaleSymbols;

/// Parses a display buffer into its canonical amount.
///
/// Returns `Ok(None)` for an empty (cleared) buffer, which is distinct from
/// zero. Grouped and ungrouped integers parse identically, and a bare
/// trailing comma is accepted while the user is still typing.
///
/// # Errors
///
/// Returns `EngineError::InvalidFormat` when the buffer does not match the
/// accepted grammar or exceeds the representable range.
///
/// # Example
///
/// ```
/// use finmov_core::input::parse_display;
///
/// let amount = parse_display("1.234,5").unwrap().unwrap();
/// assert_eq!(amount.to_string(), "1234.5");
/// assert!(parse_display("").unwrap().is_none());
/// assert!(parse_display("1,23,45").is_err());
/// ```
pub fn parse_display(buffer: &str) -> EngineResult<Option<CanonicalAmount>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (integer_run, fraction_run) = match unsigned.split_once(DECIMAL_SEPARATOR) {
        Some((integer_run, fraction_run)) => (integer_run, Some(fraction_run)),
        None => (unsigned, None),
    };

    let fraction_ok = fraction_run.is_none_or(|fraction| {
        fraction.len() <= MAX_FRACTION_DIGITS && fraction.bytes().all(|b| b.is_ascii_digit())
    });
    if !is_integer_run(integer_run) || !fraction_ok {
        trace!(buffer = %buffer, "rejected amount buffer");
        return Err(EngineError::InvalidFormat(buffer.to_string()));
    }

    let mut canonical = String::with_capacity(unsigned.len() + 1);
    if negative {
        canonical.push('-');
    }
    canonical.extend(integer_run.chars().filter(|&c| c != GROUP_SEPARATOR));
    if let Some(fraction) = fraction_run.filter(|fraction| !fraction.is_empty()) {
        canonical.push('.');
        canonical.push_str(fraction);
    }

    let value = Decimal::from_str(&canonical)
        .map_err(|_| EngineError::InvalidFormat(format!("{buffer} is out of range")))?;
    Ok(Some(CanonicalAmount::from_decimal(value)))
}

/// Parses text produced by a locale formatter (or typed in that locale's
/// convention) into its canonical amount.
///
/// The locale's decimal, grouping and minus symbols are mapped onto the
/// display convention; whitespace and currency symbol characters are
/// dropped before handing the buffer to [`parse_display`].
///
/// # Errors
///
/// Returns `EngineError::InvalidFormat` when the remaining text is not a
/// valid amount.
pub fn parse_localized(text: &str, symbols: &LocaleSymbols) -> EngineResult<Option<CanonicalAmount>> {
    let mut buffer = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix(symbols.decimal()) {
            buffer.push(DECIMAL_SEPARATOR);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(symbols.group()) {
            buffer.push(GROUP_SEPARATOR);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(symbols.minus()) {
            buffer.push('-');
            rest = after;
        } else {
            if !is_symbol_noise(ch) {
                buffer.push(ch);
            }
            rest = &rest[ch.len_utf8()..];
        }
    }

    parse_display(&buffer)
}

/// Characters that belong to currency symbols or spacing, never to the number.
pub(crate) fn is_symbol_noise(ch: char) -> bool {
    ch.is_whitespace() || ch.is_alphabetic() || ch == '$'
}

/// `\d{1,3}(\.\d{3})*` or `\d+`.
fn is_integer_run(run: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    if !run.contains(GROUP_SEPARATOR) {
        return !run.is_empty() && all_digits(run);
    }

    let mut groups = run.split(GROUP_SEPARATOR);
    let leading_ok = groups
        .next()
        .is_some_and(|head| (1..=3).contains(&head.len()) && all_digits(head));
    leading_ok && groups.all(|group| group.len() == 3 && all_digits(group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("1234", dec!(1234))]
    #[case("1.234", dec!(1234))]
    #[case("1.234,5", dec!(1234.5))]
    #[case("1.234.567,89", dec!(1234567.89))]
    #[case("1234,56", dec!(1234.56))]
    #[case("100,", dec!(100))]
    #[case("0,5", dec!(0.5))]
    #[case("0", dec!(0))]
    #[case("  12,3  ", dec!(12.3))]
    #[case("-1.234,50", dec!(-1234.50))]
    #[case("007", dec!(7))]
    fn test_parse_display_accepts(#[case] buffer: &str, #[case] expected: Decimal) {
        let amount = parse_display(buffer).unwrap().unwrap();
        assert_eq!(amount.value(), expected);
    }

    #[rstest]
    #[case("1,23,45")]
    #[case("1,234")]
    #[case("12.34")]
    #[case("1234.567")]
    #[case(".123")]
    #[case("1..234")]
    #[case(",5")]
    #[case("-")]
    #[case("--5")]
    #[case("1.234.")]
    #[case("abc")]
    #[case("1 234")]
    #[case("US$ 5,00")]
    fn test_parse_display_rejects(#[case] buffer: &str) {
        assert!(matches!(
            parse_display(buffer),
            Err(EngineError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_is_no_value() {
        assert_eq!(parse_display("").unwrap(), None);
        assert_eq!(parse_display("   ").unwrap(), None);
    }

    #[test]
    fn test_empty_differs_from_zero() {
        assert_eq!(
            parse_display("0").unwrap(),
            Some(CanonicalAmount::ZERO)
        );
        assert_ne!(parse_display("0").unwrap(), parse_display("").unwrap());
    }

    #[test]
    fn test_grouped_and_plain_integers_parse_identically() {
        assert_eq!(
            parse_display("1234").unwrap(),
            parse_display("1.234").unwrap()
        );
    }

    #[test]
    fn test_canonical_text() {
        assert_eq!(parse_display("1.234,5").unwrap().unwrap().to_string(), "1234.5");
        assert_eq!(parse_display("1.234.567").unwrap().unwrap().to_string(), "1234567");
        assert_eq!(parse_display("5,00").unwrap().unwrap().to_string(), "5.00");
    }

    #[test]
    fn test_out_of_range_is_invalid_format() {
        let huge = "9".repeat(40);
        assert!(matches!(
            parse_display(&huge),
            Err(EngineError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_localized_es_ar() {
        let symbols = LocaleSymbols::resolve("es-AR").unwrap();
        let amount = parse_localized("US$ 1.234,50", &symbols).unwrap().unwrap();
        assert_eq!(amount.value(), dec!(1234.50));

        let amount = parse_localized("-$ 10,00", &symbols).unwrap().unwrap();
        assert_eq!(amount.value(), dec!(-10));
    }

    #[test]
    fn test_parse_localized_en() {
        let symbols = LocaleSymbols::resolve("en-US").unwrap();
        let amount = parse_localized("$1,234.50", &symbols).unwrap().unwrap();
        assert_eq!(amount.value(), dec!(1234.50));

        let amount = parse_localized("-ARS 7.25", &symbols).unwrap().unwrap();
        assert_eq!(amount.value(), dec!(-7.25));
    }

    #[test]
    fn test_parse_localized_empty_and_invalid() {
        let symbols = LocaleSymbols::resolve("es-AR").unwrap();
        assert_eq!(parse_localized("US$ ", &symbols).unwrap(), None);
        assert!(parse_localized("1,2,3", &symbols).is_err());
    }
}
