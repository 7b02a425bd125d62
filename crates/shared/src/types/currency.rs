//! Currencies supported by the exchange pair.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// ISO 4217 currency codes handled by the engine.
///
/// Parsing amounts is currency-agnostic; the currency only drives the symbol
/// used by the formatter and which side of a swap an amount belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Argentine Peso
    Ars,
    /// US Dollar
    Usd,
}

impl Currency {
    /// Canonical ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ars => "ARS",
            Self::Usd => "USD",
        }
    }

    /// Number of fractional digits stored for amounts in this currency.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        2
    }

    /// The other side of the ARS/USD pair.
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Ars => Self::Usd,
            Self::Usd => Self::Ars,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ARS" => Ok(Self::Ars),
            "USD" => Ok(Self::Usd),
            _ => Err(EngineError::UnknownCurrency(s.to_string())),
        }
    }
}
