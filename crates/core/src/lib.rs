//! Core amount engine for Finmov.
//!
//! This crate contains pure computation with ZERO I/O: every function takes
//! plain strings, decimals and identifiers and returns plain values.
//!
//! # Modules
//!
//! - `input` - Keystroke masking, caret re-anchoring and display-buffer parsing
//! - `display` - Locale-aware formatting of amounts and rates
//! - `exchange` - ARS/USD rate snapshots, conversions and the swap desk
//! - `table` - Numeric coercion of formatted cells for sorting

pub mod display;
pub mod exchange;
pub mod input;
pub mod table;
