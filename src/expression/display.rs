use std::fmt;

use crate::expression::ast::Expression;
use crate::operators::{Notation, Operator};
use crate::value::is_plain;

const ATOM: u8 = u8::MAX;
const UNARY: u8 = u8::MAX - 1;

fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Number(value) if is_plain(value) => ATOM,
        Expression::Number(_) => 0,
        Expression::Join { operator, .. } => match operator.notation() {
            Notation::Infix { precedence } => precedence,
            _ => ATOM,
        },
        Expression::Modifier { operator, .. } => match operator.notation() {
            Notation::Function => ATOM,
            _ => UNARY,
        },
    }
}

/// `a + (b + c)` may drop its parentheses, `a - (b - c)` may not
fn same_commutative_operator(operator: &Operator, expr: &Expression) -> bool {
    match expr {
        Expression::Join { operator: inner, .. } => {
            operator.is_commutative() && inner == operator
        }
        _ => false,
    }
}

fn write_with_parens(f: &mut fmt::Formatter, expr: &Expression, need_parens: bool) -> fmt::Result {
    if need_parens {
        write!(f, "(")?;
        fmt_expression(f, expr)?;
        write!(f, ")")
    } else {
        fmt_expression(f, expr)
    }
}

fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
    match expr {
        Expression::Number(value) => write!(f, "{}", value),
        Expression::Join {
            operator,
            left,
            right,
        } => match operator.notation() {
            Notation::Infix { precedence: p } => {
                let lp = precedence(left);
                let rp = precedence(right);
                let need_l = lp < p;
                let need_r = rp < p || (rp == p && !same_commutative_operator(operator, right));
                write_with_parens(f, left, need_l)?;
                write!(f, " {} ", operator.symbol())?;
                write_with_parens(f, right, need_r)
            }
            _ => {
                write!(f, "{}(", operator.symbol())?;
                fmt_expression(f, left)?;
                write!(f, ", ")?;
                fmt_expression(f, right)?;
                write!(f, ")")
            }
        },
        Expression::Modifier { operator, operand } => {
            // √3! and 3!! are ambiguous, so anything but an atom is wrapped
            let need = precedence(operand) < ATOM;
            match operator.notation() {
                Notation::Postfix => {
                    write_with_parens(f, operand, need)?;
                    write!(f, "{}", operator.symbol())
                }
                Notation::Function => {
                    write!(f, "{}(", operator.symbol())?;
                    fmt_expression(f, operand)?;
                    write!(f, ")")
                }
                _ => {
                    write!(f, "{}", operator.symbol())?;
                    write_with_parens(f, operand, need)
                }
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_expression(f, self)
    }
}
