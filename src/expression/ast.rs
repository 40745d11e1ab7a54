use crate::operators::Operator;
use crate::value::Value;

/// Arithmetic over the input values, shaped by the steps of a path
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(Value),
    Join {
        operator: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Modifier {
        operator: Operator,
        operand: Box<Expression>,
    },
}

impl Expression {
    /// Number of operator applications in the tree
    pub fn operation_count(&self) -> usize {
        match self {
            Expression::Number(_) => 0,
            Expression::Join { left, right, .. } => {
                1 + left.operation_count() + right.operation_count()
            }
            Expression::Modifier { operand, .. } => 1 + operand.operation_count(),
        }
    }

    /// Leaf values in left-to-right order
    pub fn leaves(&self) -> Vec<Value> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Number(value) => out.push(*value),
                Expression::Join { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
                Expression::Modifier { operand, .. } => stack.push(operand),
            }
        }
        out
    }
}
