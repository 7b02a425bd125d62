//! Locale-aware display formatting.

pub mod format;
pub mod locale;

#[cfg(test)]
mod props;

pub use format::{FormatOptions, currency_symbol, format_amount, format_decimal, format_rate};
pub use locale::LocaleSymbols;
