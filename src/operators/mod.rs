//! Join and modifier operators, and the registry handed to the search engine

mod builtin;
mod errors;
mod registry;
mod types;

pub use builtin::{BUILTIN_NAMES, add, builtin, divide, factorial, multiply, sqrt, subtract};
pub use errors::OperatorError;
pub use registry::OperatorSet;
pub use types::{
    JoinApply, JoinValidity, ModifierApply, ModifierValidity, Notation, Operator, OperatorKind,
};
