//! Turning rendered cells back into numbers so tables sort by value.
//!
//! Cells hold either canonical text (`1234.5`), display buffers
//! (`1.234,50`) or formatted amounts (`US$ 1.234,50`). Canonical text wins
//! when a cell could be read both ways, so `1.23` is one point twenty-three
//! while `1.234` is one thousand two hundred thirty-four.
//!
//! Cells rendered in a locale with other symbols (`$1,234.50` under `en-US`)
//! need the `_localized` variants, which read them with that locale's
//! symbols before falling back to the display convention.

use std::cmp::Ordering;
use std::str::FromStr;

use finmov_shared::CanonicalAmount;
use rust_decimal::Decimal;

use crate::display::LocaleSymbols;
use crate::input::parse::{is_symbol_noise, parse_display, parse_localized};

/// Numeric value of a cell, or `None` for empty and non-numeric cells.
///
/// Formatted cells are read in the display convention (`.` groups, `,`
/// decimals). Use [`sort_key_localized`] for cells rendered in another
/// locale.
#[must_use]
pub fn sort_key(cell: &str) -> Option<Decimal> {
    coerce(cell, None)
}

/// Like [`sort_key`], but formatted cells are first read with the symbols of
/// the locale that rendered them (`$1,234.50` under `en-US`).
#[must_use]
pub fn sort_key_localized(cell: &str, symbols: &LocaleSymbols) -> Option<Decimal> {
    coerce(cell, Some(symbols))
}

/// Orders two cells by numeric value; non-numeric cells sort last, among
/// themselves by text.
#[must_use]
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    order(a, b, sort_key(a), sort_key(b))
}

/// Like [`compare_cells`], reading formatted cells in `symbols`' locale.
#[must_use]
pub fn compare_cells_localized(a: &str, b: &str, symbols: &LocaleSymbols) -> Ordering {
    order(a, b, sort_key_localized(a, symbols), sort_key_localized(b, symbols))
}

fn coerce(cell: &str, symbols: Option<&LocaleSymbols>) -> Option<Decimal> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(amount) = trimmed.parse::<CanonicalAmount>() {
        return Some(amount.value());
    }
    if let Some(Ok(Some(amount))) = symbols.map(|symbols| parse_localized(trimmed, symbols)) {
        return Some(amount.value());
    }

    let cleaned: String = trimmed.chars().filter(|&c| !is_symbol_noise(c)).collect();
    if let Ok(Some(amount)) = parse_display(&cleaned) {
        return Some(amount.value());
    }

    // Rates keep more than two fractional digits in canonical form.
    if cleaned.contains(',') {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

fn order(a: &str, b: &str, key_a: Option<Decimal>, key_b: Option<Decimal>) -> Ordering {
    match (key_a, key_b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
