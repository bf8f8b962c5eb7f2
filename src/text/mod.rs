//! Text utilities shared by the flattener and the marker rules.

pub mod normalize;

pub use normalize::{digit_value, parse_leading_number, remove_diacritics, DIGIT_CLASS};
