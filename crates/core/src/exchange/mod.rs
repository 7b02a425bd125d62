//! ARS/USD exchange: rate snapshots, conversion and the swap desk.

pub mod conversion;
pub mod desk;
pub mod rate;

#[cfg(test)]
mod props;

pub use conversion::{ConversionRequest, ConversionResult, convert};
pub use desk::{Balances, ExchangeDesk};
pub use rate::{ExchangeRate, RateMode, SwapDirection};
