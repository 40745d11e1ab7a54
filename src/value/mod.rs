//! Exact numeric values and the helpers the operators are built from

mod arith;
mod errors;
mod format;
mod parse;

pub use arith::{MAX_FACTORIAL_ARG, exact_sqrt, factorial};
pub use errors::ValueError;
pub use format::{format_multiset, format_operand, is_plain};
pub use parse::{parse_value, parse_values};

/// An exact rational number. Every value the search produces is one of these,
/// so equality with a target never depends on floating point tolerance.
pub type Value = num_rational::Ratio<i64>;
