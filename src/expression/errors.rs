use thiserror::Error;

use crate::value::Value;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Operator '{operator}' rejected its operands")]
    Rejected { operator: String },
    #[error("Step {step}: position {position} is out of range for {len} values")]
    PositionOutOfRange {
        step: usize,
        position: usize,
        len: usize,
    },
    #[error("Step {step}: position {position} holds {found}, path expects {expected}")]
    OperandMismatch {
        step: usize,
        position: usize,
        expected: Value,
        found: Value,
    },
    #[error("Step {step}: operator '{operator}' does not match the recorded operands")]
    ArityMismatch { step: usize, operator: String },
    #[error("Step {step}: recomputed {found}, path records {expected}")]
    ResultMismatch {
        step: usize,
        expected: Value,
        found: Value,
    },
    #[error("Path leaves {remaining} values instead of one")]
    NotTerminal { remaining: usize },
}
