use thiserror::Error;

/// Errors that can occur while turning user input into values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Value list cannot be empty")]
    Empty,
    #[error("Not a number: '{0}'")]
    Invalid(String),
    #[error("Value must be finite: '{0}'")]
    NonFinite(String),
    #[error("Zero denominator in '{0}'")]
    ZeroDenominator(String),
    #[error("Value cannot be represented exactly: '{0}'")]
    Unrepresentable(String),
}
