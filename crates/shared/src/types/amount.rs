//! Canonical amount: the exact value of record for a monetary field.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! The canonical text form is `-?\d+(\.\d{1,2})?`: `.` as decimal separator,
//! no grouping, at most two fractional digits.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A committed monetary amount with at most two fractional digits.
///
/// Equality is numeric (`5` equals `5.00`), while `Display` keeps the scale
/// the value was built with so a clamped `100.00` still renders as `"100.00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalAmount(Decimal);

impl CanonicalAmount {
    /// Maximum number of fractional digits a canonical amount carries.
    pub const MAX_SCALE: u32 = 2;

    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Builds a canonical amount, rounding half away from zero to two
    /// fractional digits when the input carries more.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(Self::MAX_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        Self(rounded)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns the same value with exactly two fractional digits (`100` → `100.00`).
    #[must_use]
    pub fn with_fixed_scale(self) -> Self {
        let mut value = self.0;
        value.rescale(Self::MAX_SCALE);
        Self(value)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }
}

/// Checks `-?\d+(\.\d{1,2})?`.
fn is_canonical(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let int_ok = !int_part.is_empty() && int_part.bytes().all(|b| b.is_ascii_digit());
    let frac_ok = frac_part.is_none_or(|frac| {
        (1..=2).contains(&frac.len()) && frac.bytes().all(|b| b.is_ascii_digit())
    });

    int_ok && frac_ok
}

impl FromStr for CanonicalAmount {
    type Err = EngineError;

    /// Parses the canonical text form only; display buffers with grouping or
    /// `,` decimals go through the input parser instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_canonical(s) {
            return Err(EngineError::InvalidFormat(s.to_string()));
        }
        Decimal::from_str(s)
            .map(Self::from_decimal)
            .map_err(|_| EngineError::InvalidFormat(format!("{s} is out of range")))
    }
}

impl std::fmt::Display for CanonicalAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CanonicalAmount {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CanonicalAmount> for String {
    fn from(amount: CanonicalAmount) -> Self {
        amount.to_string()
    }
}

impl From<CanonicalAmount> for Decimal {
    fn from(amount: CanonicalAmount) -> Self {
        amount.0
    }
}

#[cfg(test)]
#[path = "amount_tests.rs"]
mod tests;
