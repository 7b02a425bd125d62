//! Common types used across the engine.

pub mod amount;
pub mod currency;

pub use amount::CanonicalAmount;
pub use currency::Currency;
