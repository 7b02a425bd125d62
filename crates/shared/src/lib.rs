//! Shared types, errors, and configuration for Finmov.
//!
//! This crate provides common types used by the amount engine:
//! - Canonical amounts with exact decimal precision
//! - The ARS/USD currency pair
//! - Engine-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use types::{CanonicalAmount, Currency};
