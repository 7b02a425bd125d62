//! Exchange rate snapshots and swap directions.

use chrono::{DateTime, Utc};
use finmov_shared::{Currency, EngineError, EngineResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Buy/sell quote for USD priced in ARS.
///
/// Snapshots are immutable: a refresh replaces the whole value, never
/// individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExchangeRate", rename_all = "camelCase")]
pub struct ExchangeRate {
    buy: Decimal,
    sell: Decimal,
    updated_at: DateTime<Utc>,
}

/// Unvalidated wire shape of a rate snapshot.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExchangeRate {
    buy: Decimal,
    sell: Decimal,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RawExchangeRate> for ExchangeRate {
    type Error = EngineError;

    fn try_from(raw: RawExchangeRate) -> Result<Self, Self::Error> {
        Self::new(raw.buy, raw.sell, raw.updated_at)
    }
}

impl ExchangeRate {
    /// Creates a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidRate` when either side is not strictly
    /// positive or the buy side has no representable reciprocal.
    pub fn new(buy: Decimal, sell: Decimal, updated_at: DateTime<Utc>) -> EngineResult<Self> {
        if buy <= Decimal::ZERO || Decimal::ONE.checked_div(buy).is_none() {
            return Err(EngineError::InvalidRate(buy));
        }
        if sell <= Decimal::ZERO {
            return Err(EngineError::InvalidRate(sell));
        }
        Ok(Self {
            buy,
            sell,
            updated_at,
        })
    }

    /// ARS paid per USD when the desk buys dollars.
    #[must_use]
    pub const fn buy(&self) -> Decimal {
        self.buy
    }

    /// ARS received per USD when the desk sells dollars.
    #[must_use]
    pub const fn sell(&self) -> Decimal {
        self.sell
    }

    /// When the quote was taken.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Base rate for `direction`, as target units per source unit.
    ///
    /// USD→ARS uses the sell rate; ARS→USD uses the reciprocal of the buy
    /// rate.
    pub fn base_rate(&self, direction: SwapDirection) -> EngineResult<Decimal> {
        match direction {
            SwapDirection::UsdToArs => Ok(self.sell),
            SwapDirection::ArsToUsd => Decimal::ONE
                .checked_div(self.buy)
                .ok_or(EngineError::InvalidRate(self.buy)),
        }
    }
}

/// Which way a swap converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapDirection {
    /// Dollars in, pesos out.
    UsdToArs,
    /// Pesos in, dollars out.
    ArsToUsd,
}

impl SwapDirection {
    /// Source currency.
    #[must_use]
    pub const fn source(self) -> Currency {
        match self {
            Self::UsdToArs => Currency::Usd,
            Self::ArsToUsd => Currency::Ars,
        }
    }

    /// Target currency.
    #[must_use]
    pub const fn target(self) -> Currency {
        match self {
            Self::UsdToArs => Currency::Ars,
            Self::ArsToUsd => Currency::Usd,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::UsdToArs => Self::ArsToUsd,
            Self::ArsToUsd => Self::UsdToArs,
        }
    }

    /// Direction converting out of `from`.
    #[must_use]
    pub const fn starting_from(from: Currency) -> Self {
        match from {
            Currency::Usd => Self::UsdToArs,
            Currency::Ars => Self::ArsToUsd,
        }
    }
}

/// Where the desk's rate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateMode {
    /// Derived from the latest snapshot on every read.
    #[default]
    Automatic,
    /// Frozen at an operator-supplied value until reset.
    Overridden(Decimal),
}
