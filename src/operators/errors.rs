use thiserror::Error;

/// Errors raised while building an operator set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    #[error("Operator '{0}' is already registered")]
    Duplicate(String),
    #[error("Unknown operator: '{0}'")]
    Unknown(String),
    #[error("Operator '{name}' is inconsistent: {reason}")]
    Inconsistent { name: String, reason: &'static str },
}
