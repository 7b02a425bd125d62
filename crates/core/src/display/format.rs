//! Read-only rendering of amounts and rates.
//!
//! Formatting is purely presentational: the fraction is cut or zero-padded
//! from the canonical digit string, never rounded and never routed through
//! floating point.

use finmov_shared::{CanonicalAmount, Currency, EngineConfig, EngineResult};
use rust_decimal::Decimal;

use super::locale::LocaleSymbols;

/// How amounts and rates are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Locale number symbols.
    pub symbols: LocaleSymbols,
    /// Prefix amounts with the currency symbol.
    pub show_symbol: bool,
    /// Fractional digits shown for amounts.
    pub fraction_digits: u32,
    /// Fractional digits shown for exchange rates.
    pub rate_fraction_digits: u32,
}

impl FormatOptions {
    /// Options for `locale_id` with the symbol on, 2 amount digits and 4
    /// rate digits.
    pub fn new(locale_id: &str) -> EngineResult<Self> {
        Ok(Self {
            symbols: LocaleSymbols::resolve(locale_id)?,
            show_symbol: true,
            fraction_digits: 2,
            rate_fraction_digits: 4,
        })
    }

    /// Options from the engine configuration.
    pub fn from_config(config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            symbols: LocaleSymbols::resolve(&config.locale)?,
            show_symbol: config.show_symbol,
            fraction_digits: config.amount_fraction_digits,
            rate_fraction_digits: config.rate_fraction_digits,
        })
    }

    /// Turns the currency symbol on or off.
    #[must_use]
    pub fn with_symbol(mut self, show_symbol: bool) -> Self {
        self.show_symbol = show_symbol;
        self
    }

    /// Sets the fractional digits shown for amounts.
    #[must_use]
    pub fn with_fraction_digits(mut self, fraction_digits: u32) -> Self {
        self.fraction_digits = fraction_digits;
        self
    }
}

/// Display symbol for `currency` in the given locale.
#[must_use]
pub fn currency_symbol(currency: Currency, symbols: &LocaleSymbols) -> &'static str {
    let english_us = symbols.language() == "en" && matches!(symbols.region(), None | Some("US"));
    match currency {
        Currency::Usd if english_us => "$",
        Currency::Usd => "US$",
        Currency::Ars if symbols.region() == Some("AR") => "$",
        Currency::Ars => "ARS",
    }
}

/// Formats a canonical amount for display.
///
/// # Example
///
/// ```
/// use finmov_core::display::{FormatOptions, format_amount};
/// use finmov_shared::Currency;
///
/// let options = FormatOptions::new("es-AR").unwrap();
/// let amount = "1234.5".parse().unwrap();
/// assert_eq!(format_amount(&amount, Currency::Usd, &options), "US$ 1.234,50");
/// ```
#[must_use]
pub fn format_amount(amount: &CanonicalAmount, currency: Currency, options: &FormatOptions) -> String {
    let number = unsigned_number(amount.value(), &options.symbols, options.fraction_digits);

    let mut out = String::with_capacity(number.len() + 6);
    if amount.is_negative() {
        out.push_str(options.symbols.minus());
    }
    if options.show_symbol {
        let symbol = currency_symbol(currency, &options.symbols);
        out.push_str(symbol);
        if options.symbols.language() != "en" || symbol.ends_with(char::is_alphabetic) {
            out.push(' ');
        }
    }
    out.push_str(&number);
    out
}

/// Formats a plain decimal (no currency symbol) with `fraction_digits`
/// fractional digits.
#[must_use]
pub fn format_decimal(value: Decimal, symbols: &LocaleSymbols, fraction_digits: u32) -> String {
    let number = unsigned_number(value, symbols, fraction_digits);
    if value.is_sign_negative() && !value.is_zero() {
        format!("{}{number}", symbols.minus())
    } else {
        number
    }
}

/// Formats an exchange rate with the configured rate precision.
#[must_use]
pub fn format_rate(rate: Decimal, options: &FormatOptions) -> String {
    format_decimal(rate, &options.symbols, options.rate_fraction_digits)
}

fn unsigned_number(value: Decimal, symbols: &LocaleSymbols, fraction_digits: u32) -> String {
    let text = value.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = symbols.group_digits(integer);
    if fraction_digits > 0 {
        out.push_str(symbols.decimal());
        out.extend(
            fraction
                .chars()
                .chain(std::iter::repeat('0'))
                .take(fraction_digits as usize),
        );
    }
    out
}
