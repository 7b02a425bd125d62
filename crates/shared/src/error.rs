//! Engine-wide error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `EngineError`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Recoverable conditions reported by the amount engine.
///
/// None of these are fatal: every variant describes input the caller can
/// correct. An explicitly cleared field is not an error and is modeled as
/// `None` by the parsing functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Buffer cannot represent a decimal under the accepted grammar.
    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),

    /// Requested amount exceeds the available source balance.
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Amount the user asked for.
        requested: Decimal,
        /// Balance available in the source account.
        available: Decimal,
    },

    /// No exchange rate snapshot (or override) is available yet.
    #[error("No exchange rate available")]
    MissingRate,

    /// Transfer amount must be strictly positive.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// Exchange rate must be strictly positive.
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(Decimal),

    /// A computed amount or balance falls outside the representable range.
    #[error("Amount out of range")]
    AmountOverflow,

    /// Locale identifier has no locale data.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Currency code outside the supported pair.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::MissingRate => "MISSING_RATE",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::UnknownLocale(_) => "UNKNOWN_LOCALE",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true when the field should keep its previous valid value.
    #[must_use]
    pub const fn keeps_previous_value(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
