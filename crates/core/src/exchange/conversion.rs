//! Currency swap computation.
//!
//! The converted amount is brought to the canonical 2-decimal boundary with
//! half-away-from-zero rounding, the same rule the input parser applies.
//! Nothing else is rounded: balances move by exact decimal amounts.

use finmov_shared::{CanonicalAmount, Currency, EngineError, EngineResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rate::SwapDirection;

/// A swap to preview or submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Currency debited.
    pub from_currency: Currency,
    /// Currency credited.
    pub to_currency: Currency,
    /// Amount debited, in `from_currency`.
    pub amount: CanonicalAmount,
    /// Target units per source unit.
    pub rate: Decimal,
}

impl ConversionRequest {
    /// Creates a request for `direction`.
    #[must_use]
    pub const fn new(direction: SwapDirection, amount: CanonicalAmount, rate: Decimal) -> Self {
        Self {
            from_currency: direction.source(),
            to_currency: direction.target(),
            amount,
            rate,
        }
    }
}

/// Outcome of a swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Amount credited, in the target currency.
    pub converted_amount: CanonicalAmount,
    /// Source balance after the debit.
    pub new_from_balance: Decimal,
    /// Target balance after the credit.
    pub new_to_balance: Decimal,
}

/// Computes a swap against the current balances of both accounts.
///
/// # Errors
///
/// - `NonPositiveAmount` if the amount is zero or negative
/// - `InvalidRate` if the rate is zero or negative
/// - `InsufficientBalance` if the amount exceeds `from_balance`
/// - `AmountOverflow` if the converted amount or a new balance is out of range
///
/// # Example
///
/// ```
/// use finmov_core::exchange::{ConversionRequest, SwapDirection, convert};
/// use rust_decimal_macros::dec;
///
/// let request = ConversionRequest::new(SwapDirection::UsdToArs, "100".parse().unwrap(), dec!(1000));
/// let result = convert(&request, dec!(250), dec!(5000)).unwrap();
/// assert_eq!(result.converted_amount.value(), dec!(100000));
/// assert_eq!(result.new_from_balance, dec!(150));
/// assert_eq!(result.new_to_balance, dec!(105000));
/// ```
pub fn convert(
    request: &ConversionRequest,
    from_balance: Decimal,
    to_balance: Decimal,
) -> EngineResult<ConversionResult> {
    let amount = request.amount.value();
    if !request.amount.is_positive() {
        return Err(EngineError::NonPositiveAmount);
    }
    if request.rate <= Decimal::ZERO {
        return Err(EngineError::InvalidRate(request.rate));
    }
    if amount > from_balance {
        return Err(EngineError::InsufficientBalance {
            requested: amount,
            available: from_balance,
        });
    }

    let converted = amount
        .checked_mul(request.rate)
        .map(CanonicalAmount::from_decimal)
        .ok_or(EngineError::AmountOverflow)?;
    let new_from_balance = from_balance
        .checked_sub(amount)
        .ok_or(EngineError::AmountOverflow)?;
    let new_to_balance = to_balance
        .checked_add(converted.value())
        .ok_or(EngineError::AmountOverflow)?;

    Ok(ConversionResult {
        converted_amount: converted,
        new_from_balance,
        new_to_balance,
    })
}
