use thiserror::Error;

use crate::expression::ExpressionError;
use crate::operators::OperatorError;
use crate::value::{Value, ValueError};

/// Configuration errors, raised before any state is expanded
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Input collection cannot be empty")]
    EmptyInput,
    #[error("Operator set cannot be empty")]
    NoOperators,
    #[error("Node budget must allow at least one expansion")]
    ZeroNodeBudget,
    #[error("Invalid value bounds: minimum {min} exceeds maximum {max}")]
    InvalidBounds { min: Value, max: Value },
    #[error("Invalid target range: lower {lower} exceeds upper {upper}")]
    InvalidTargetRange { lower: i64, upper: i64 },
    #[error("Operator error: {0}")]
    OperatorError(#[from] OperatorError),
    #[error("Value error: {0}")]
    ValueError(#[from] ValueError),
    #[error("Path replay failed: {0}")]
    ReplayError(#[from] ExpressionError),
}
