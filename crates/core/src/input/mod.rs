//! Amount field input: masking, caret re-anchoring and parsing.
//!
//! A text field feeds every raw value through [`apply_edit`]; on commit the
//! buffer goes through [`parse_display`] to produce the value of record.

pub mod caret;
pub mod mask;
pub mod parse;

#[cfg(test)]
mod props;

pub use caret::{
    MaskedEdit, apply_edit, caret_from_digit_position, count_digits_before_caret,
    recalculate_caret,
};
pub use mask::{DECIMAL_SEPARATOR, GROUP_SEPARATOR, mask_amount};
pub use parse::{parse_display, parse_localized};
