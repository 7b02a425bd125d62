//! Numeric coercion of table cells for sorting.

pub mod coercion;

pub use coercion::{compare_cells, compare_cells_localized, sort_key, sort_key_localized};
