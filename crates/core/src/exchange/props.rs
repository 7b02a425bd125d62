//! Property-based tests for exchange computation.
//!
//! - Balances are conserved on both sides of a conversion
//! - The converted amount is within half a cent of the exact product
//! - Clamping never leaves a pending amount above the balance, even when the
//!   balance carries sub-cent digits

use finmov_shared::{CanonicalAmount, EngineError};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{ConversionRequest, convert};
use super::desk::{Balances, ExchangeDesk};
use super::rate::SwapDirection;

/// Strategy to generate positive amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = CanonicalAmount> {
    (1i64..100_000_000i64).prop_map(|cents| CanonicalAmount::from_decimal(Decimal::new(cents, 2)))
}

/// Strategy to generate balances (0.00 to 2,000,000.00).
fn balance() -> impl Strategy<Value = Decimal> {
    (0i64..200_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate balances with sub-cent digits (0.000 to 2,000,000.000).
fn sub_cent_balance() -> impl Strategy<Value = Decimal> {
    (0i64..2_000_000_000i64).prop_map(|mills| Decimal::new(mills, 3))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn direction() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![Just(SwapDirection::UsdToArs), Just(SwapDirection::ArsToUsd)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* accepted conversion, the source loses exactly the amount and
    /// the target gains exactly the converted amount.
    #[test]
    fn prop_conversion_conserves_balances(
        amount in positive_amount(),
        rate in positive_rate(),
        from_balance in balance(),
        to_balance in balance(),
        direction in direction(),
    ) {
        let request = ConversionRequest::new(direction, amount, rate);
        match convert(&request, from_balance, to_balance) {
            Ok(result) => {
                prop_assert_eq!(result.new_from_balance + amount.value(), from_balance);
                prop_assert_eq!(
                    result.new_to_balance - result.converted_amount.value(),
                    to_balance
                );
                prop_assert!(result.new_from_balance >= Decimal::ZERO);
            }
            Err(err) => {
                prop_assert!(amount.value() > from_balance);
                prop_assert_eq!(
                    err,
                    EngineError::InsufficientBalance {
                        requested: amount.value(),
                        available: from_balance,
                    }
                );
            }
        }
    }

    /// *For any* amount and rate, the converted amount differs from the exact
    /// product by at most half a cent.
    #[test]
    fn prop_converted_amount_is_nearest_cent(amount in positive_amount(), rate in positive_rate()) {
        let request = ConversionRequest::new(SwapDirection::UsdToArs, amount, rate);
        let result = convert(&request, amount.value(), Decimal::ZERO).unwrap();

        let exact = amount.value() * rate;
        let diff = (result.converted_amount.value() - exact).abs();
        prop_assert!(diff <= Decimal::new(5, 3), "{} vs {}", result.converted_amount, exact);
    }

    /// *For any* requested amount, the desk never keeps a pending amount
    /// above the source balance.
    #[test]
    fn prop_pending_never_exceeds_balance(amount in positive_amount(), usd in balance()) {
        let mut desk = ExchangeDesk::new(SwapDirection::UsdToArs, Balances::new(Decimal::ZERO, usd));
        let outcome = desk.set_amount(amount);

        let pending = desk.pending_amount().unwrap();
        prop_assert!(pending.value() <= usd);
        prop_assert_eq!(outcome.is_err(), amount.value() > usd);
    }

    /// *For any* balance with sub-cent digits, a clamped amount is the
    /// largest whole-cent value within the balance and can be committed.
    #[test]
    fn prop_clamp_fits_sub_cent_balance(amount in positive_amount(), usd in sub_cent_balance()) {
        let mut desk = ExchangeDesk::new(SwapDirection::UsdToArs, Balances::new(Decimal::ZERO, usd));
        desk.override_rate(Decimal::ONE).unwrap();
        let outcome = desk.set_amount(amount);

        let pending = desk.pending_amount().unwrap();
        prop_assert!(pending.value() <= usd);
        if outcome.is_err() {
            prop_assert!(usd - pending.value() < Decimal::new(1, 2));
        }
        if pending.is_positive() {
            prop_assert!(desk.commit().is_ok());
        }
    }
}
