//! Swap desk: the state behind a currency conversion screen.
//!
//! The desk owns the latest rate snapshot, the rate mode, the pending amount
//! and both account balances. State transitions:
//!
//! - `Automatic` re-derives the rate from whichever snapshot is current.
//! - `Overridden` freezes the operator's rate until [`ExchangeDesk::reset_rate`].
//! - Swapping direction clears the pending amount and keeps the rate mode.

use finmov_shared::{CanonicalAmount, Currency, EngineError, EngineResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::conversion::{ConversionRequest, ConversionResult, convert};
use super::rate::{ExchangeRate, RateMode, SwapDirection};
use crate::input::parse_display;

/// Balances of the ARS and USD accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balances {
    /// Peso account balance.
    pub ars: Decimal,
    /// Dollar account balance.
    pub usd: Decimal,
}

impl Balances {
    /// Creates balances for both accounts.
    #[must_use]
    pub const fn new(ars: Decimal, usd: Decimal) -> Self {
        Self { ars, usd }
    }

    /// Balance of the account in `currency`.
    #[must_use]
    pub const fn get(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Ars => self.ars,
            Currency::Usd => self.usd,
        }
    }

    /// Replaces the balance of the account in `currency`.
    pub fn set(&mut self, currency: Currency, balance: Decimal) {
        match currency {
            Currency::Ars => self.ars = balance,
            Currency::Usd => self.usd = balance,
        }
    }
}

/// Conversion state for one ARS/USD swap screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeDesk {
    direction: SwapDirection,
    balances: Balances,
    snapshot: Option<ExchangeRate>,
    rate_mode: RateMode,
    pending: Option<CanonicalAmount>,
}

impl ExchangeDesk {
    /// Creates a desk with no rate snapshot and nothing pending.
    #[must_use]
    pub const fn new(direction: SwapDirection, balances: Balances) -> Self {
        Self {
            direction,
            balances,
            snapshot: None,
            rate_mode: RateMode::Automatic,
            pending: None,
        }
    }

    /// Current direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Current balances.
    #[must_use]
    pub const fn balances(&self) -> Balances {
        self.balances
    }

    /// Current rate mode.
    #[must_use]
    pub const fn rate_mode(&self) -> RateMode {
        self.rate_mode
    }

    /// Latest snapshot, if one arrived.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&ExchangeRate> {
        self.snapshot.as_ref()
    }

    /// Amount waiting to be converted.
    #[must_use]
    pub const fn pending_amount(&self) -> Option<CanonicalAmount> {
        self.pending
    }

    /// Balance available in the source account.
    #[must_use]
    pub const fn available(&self) -> Decimal {
        self.balances.get(self.direction.source())
    }

    /// Replaces the rate snapshot as a whole.
    ///
    /// A snapshot older than the current one is a stale fetch and is
    /// ignored. Returns whether the snapshot was applied.
    pub fn refresh_rates(&mut self, snapshot: ExchangeRate) -> bool {
        if let Some(current) = &self.snapshot
            && snapshot.updated_at() < current.updated_at()
        {
            debug!(
                stale = %snapshot.updated_at(),
                current = %current.updated_at(),
                "ignoring stale exchange rate snapshot"
            );
            return false;
        }

        debug!(
            buy = %snapshot.buy(),
            sell = %snapshot.sell(),
            updated_at = %snapshot.updated_at(),
            mode = ?self.rate_mode,
            "exchange rate snapshot replaced"
        );
        self.snapshot = Some(snapshot);
        true
    }

    /// Freezes the rate at an operator-supplied value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` when `rate` is not strictly positive; the
    /// previous mode is kept.
    pub fn override_rate(&mut self, rate: Decimal) -> EngineResult<()> {
        if rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate(rate));
        }
        debug!(%rate, direction = ?self.direction, "exchange rate overridden");
        self.rate_mode = RateMode::Overridden(rate);
        Ok(())
    }

    /// Returns to the rate derived from the current snapshot.
    pub fn reset_rate(&mut self) {
        debug!("exchange rate override cleared");
        self.rate_mode = RateMode::Automatic;
    }

    /// Flips the direction and clears the pending amount.
    ///
    /// An overridden rate survives the swap; an automatic one is re-derived
    /// from the current snapshot for the new direction.
    pub fn swap_direction(&mut self) {
        self.direction = self.direction.reversed();
        self.pending = None;
        debug!(direction = ?self.direction, mode = ?self.rate_mode, "swap direction changed");
    }

    /// Rate applied to the next conversion, if any is available.
    #[must_use]
    pub fn current_rate(&self) -> Option<Decimal> {
        match self.rate_mode {
            RateMode::Overridden(rate) => Some(rate),
            RateMode::Automatic => self
                .snapshot
                .as_ref()
                .and_then(|snapshot| snapshot.base_rate(self.direction).ok()),
        }
    }

    /// Whether conversion actions can be offered at all.
    #[must_use]
    pub fn rate_available(&self) -> bool {
        self.current_rate().is_some()
    }

    /// Sets the pending amount.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientBalance` when `amount` exceeds the source
    /// balance. The pending amount is then clamped to the balance, with two
    /// fractional digits, so the field can show the maximum. Sub-cent
    /// balances are floored so the clamp never exceeds what is available.
    pub fn set_amount(&mut self, amount: CanonicalAmount) -> EngineResult<CanonicalAmount> {
        let available = self.available();
        if amount.value() > available {
            let floored = available.round_dp_with_strategy(
                CanonicalAmount::MAX_SCALE,
                RoundingStrategy::ToNegativeInfinity,
            );
            let clamped = CanonicalAmount::from_decimal(floored).with_fixed_scale();
            debug!(requested = %amount, %clamped, "amount clamped to available balance");
            self.pending = Some(clamped);
            return Err(EngineError::InsufficientBalance {
                requested: amount.value(),
                available,
            });
        }
        self.pending = Some(amount);
        Ok(amount)
    }

    /// Commits a display buffer from the amount field.
    ///
    /// An empty buffer clears the pending amount and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` leaves the previous pending amount untouched;
    /// `InsufficientBalance` behaves as in [`ExchangeDesk::set_amount`].
    pub fn set_amount_text(&mut self, buffer: &str) -> EngineResult<Option<CanonicalAmount>> {
        match parse_display(buffer)? {
            Some(amount) => self.set_amount(amount).map(Some),
            None => {
                self.clear_amount();
                Ok(None)
            }
        }
    }

    /// Clears the pending amount.
    pub fn clear_amount(&mut self) {
        self.pending = None;
    }

    /// Builds the request for the pending amount.
    ///
    /// # Errors
    ///
    /// - `MissingRate` if no snapshot arrived and the rate is not overridden
    /// - `NonPositiveAmount` if nothing is pending
    pub fn request(&self) -> EngineResult<ConversionRequest> {
        let rate = self.current_rate().ok_or(EngineError::MissingRate)?;
        let amount = self.pending.ok_or(EngineError::NonPositiveAmount)?;
        Ok(ConversionRequest::new(self.direction, amount, rate))
    }

    /// Computes the outcome of converting the pending amount.
    ///
    /// # Errors
    ///
    /// Any error from [`ExchangeDesk::request`] or [`convert`].
    pub fn preview(&self) -> EngineResult<ConversionResult> {
        let request = self.request()?;
        convert(
            &request,
            self.balances.get(request.from_currency),
            self.balances.get(request.to_currency),
        )
    }

    /// Applies the pending conversion to the balances and clears the amount.
    ///
    /// # Errors
    ///
    /// Same as [`ExchangeDesk::preview`]. Nothing changes when the
    /// conversion is rejected.
    pub fn commit(&mut self) -> EngineResult<ConversionResult> {
        let request = self.request()?;
        let result = convert(
            &request,
            self.balances.get(request.from_currency),
            self.balances.get(request.to_currency),
        )?;

        self.balances.set(request.from_currency, result.new_from_balance);
        self.balances.set(request.to_currency, result.new_to_balance);
        self.pending = None;
        debug!(
            from = %request.from_currency,
            to = %request.to_currency,
            amount = %request.amount,
            converted = %result.converted_amount,
            "conversion committed"
        );
        Ok(result)
    }
}
