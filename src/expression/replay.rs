use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::state::{Operand, Operands, Path};
use crate::value::Value;

/// Result of replaying a path against the values it started from
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    /// The expression for the final value
    pub expression: Expression,
    /// The sorted multiset before the first step and after every step
    pub snapshots: Vec<Vec<Value>>,
}

type Slot = (Value, Expression);

/// Rebuild the expression a path describes, checking every recorded operand
/// and result on the way.
///
/// Slots are kept sorted by value exactly like [`crate::State`] keeps its
/// values, so recorded positions address the same values.
///
/// # Errors
///
/// Returns an error if a step refers to a missing position, disagrees with
/// the value found there, recomputes to a different result, or if the path
/// does not end with a single value.
pub fn replay(initial: &[Value], path: &Path) -> Result<Replay, ExpressionError> {
    let mut slots: Vec<Slot> = initial
        .iter()
        .map(|value| (*value, Expression::Number(*value)))
        .collect();
    sort_slots(&mut slots);

    let mut snapshots = vec![values_of(&slots)];

    for (idx, step) in path.iter().enumerate() {
        let step_no = idx + 1;
        let operator = *step.operator();

        let (value, expression) = match *step.operands() {
            Operands::Join { left, right } if operator.is_join() => {
                if left.position == right.position {
                    return Err(ExpressionError::ArityMismatch {
                        step: step_no,
                        operator: operator.name().to_string(),
                    });
                }
                check_operand(&slots, step_no, left)?;
                check_operand(&slots, step_no, right)?;

                let value = operator
                    .apply_join(left.value, right.value)
                    .ok_or_else(|| ExpressionError::Rejected {
                        operator: operator.name().to_string(),
                    })?;

                let (first, second) = if left.position > right.position {
                    (left.position, right.position)
                } else {
                    (right.position, left.position)
                };
                let removed_first = slots.remove(first).1;
                let removed_second = slots.remove(second).1;
                let (left_expr, right_expr) = if left.position > right.position {
                    (removed_first, removed_second)
                } else {
                    (removed_second, removed_first)
                };

                (
                    value,
                    Expression::Join {
                        operator,
                        left: Box::new(left_expr),
                        right: Box::new(right_expr),
                    },
                )
            }
            Operands::Modifier(operand) if !operator.is_join() => {
                check_operand(&slots, step_no, operand)?;

                let value = operator.apply_modifier(operand.value).ok_or_else(|| {
                    ExpressionError::Rejected {
                        operator: operator.name().to_string(),
                    }
                })?;
                let operand_expr = slots.remove(operand.position).1;

                (
                    value,
                    Expression::Modifier {
                        operator,
                        operand: Box::new(operand_expr),
                    },
                )
            }
            _ => {
                return Err(ExpressionError::ArityMismatch {
                    step: step_no,
                    operator: operator.name().to_string(),
                });
            }
        };

        if value != step.result() {
            return Err(ExpressionError::ResultMismatch {
                step: step_no,
                expected: step.result(),
                found: value,
            });
        }

        trace!("Replayed step {}: {}", step_no, step);
        slots.push((value, expression));
        sort_slots(&mut slots);
        snapshots.push(values_of(&slots));
    }

    let [(_, expression)]: [Slot; 1] =
        slots
            .try_into()
            .map_err(|rest: Vec<Slot>| ExpressionError::NotTerminal {
                remaining: rest.len(),
            })?;

    Ok(Replay {
        expression,
        snapshots,
    })
}

fn check_operand(slots: &[Slot], step: usize, operand: Operand) -> Result<(), ExpressionError> {
    match slots.get(operand.position) {
        None => Err(ExpressionError::PositionOutOfRange {
            step,
            position: operand.position,
            len: slots.len(),
        }),
        Some((found, _)) if *found != operand.value => Err(ExpressionError::OperandMismatch {
            step,
            position: operand.position,
            expected: operand.value,
            found: *found,
        }),
        Some(_) => Ok(()),
    }
}

fn sort_slots(slots: &mut [Slot]) {
    slots.sort_by(|a, b| a.0.cmp(&b.0));
}

fn values_of(slots: &[Slot]) -> Vec<Value> {
    slots.iter().map(|(value, _)| *value).collect()
}
