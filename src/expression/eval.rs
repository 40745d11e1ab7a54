use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::value::Value;

impl Expression {
    /// Recompute the value of the tree with the operators' own predicates.
    ///
    /// # Errors
    ///
    /// Returns an error when an operator rejects its operands (division by
    /// zero, factorial of a fraction, an irrational square root, overflow).
    pub fn evaluate(&self) -> Result<Value, ExpressionError> {
        let result = match self {
            Expression::Number(value) => Ok(*value),
            Expression::Join {
                operator,
                left,
                right,
            } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                operator
                    .apply_join(left, right)
                    .ok_or_else(|| ExpressionError::Rejected {
                        operator: operator.name().to_string(),
                    })
            }
            Expression::Modifier { operator, operand } => {
                let operand = operand.evaluate()?;
                operator
                    .apply_modifier(operand)
                    .ok_or_else(|| ExpressionError::Rejected {
                        operator: operator.name().to_string(),
                    })
            }
        };

        if let Err(e) = &result {
            debug!("Expression evaluation failed: {}", e);
        }

        result
    }
}
