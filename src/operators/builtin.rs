use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::operators::types::{Notation, Operator};
use crate::value::{self, MAX_FACTORIAL_ARG, Value};

/// Names accepted by [`builtin`], in the order of [`crate::OperatorSet::standard`]
pub const BUILTIN_NAMES: [&str; 6] = ["add", "subtract", "multiply", "divide", "factorial", "sqrt"];

const ADDITIVE: u8 = 1;
const MULTIPLICATIVE: u8 = 2;

fn any_operands(_: Value, _: Value) -> bool {
    true
}

pub fn add() -> Operator {
    Operator::join(
        "add",
        "+",
        Notation::Infix {
            precedence: ADDITIVE,
        },
        true,
        any_operands,
        |a, b| a.checked_add(&b),
    )
}

pub fn subtract() -> Operator {
    Operator::join(
        "subtract",
        "-",
        Notation::Infix {
            precedence: ADDITIVE,
        },
        false,
        any_operands,
        |a, b| a.checked_sub(&b),
    )
}

pub fn multiply() -> Operator {
    Operator::join(
        "multiply",
        "*",
        Notation::Infix {
            precedence: MULTIPLICATIVE,
        },
        true,
        any_operands,
        |a, b| a.checked_mul(&b),
    )
}

pub fn divide() -> Operator {
    Operator::join(
        "divide",
        "/",
        Notation::Infix {
            precedence: MULTIPLICATIVE,
        },
        false,
        |_, divisor| !divisor.is_zero(),
        |a, b| a.checked_div(&b),
    )
}

pub fn factorial() -> Operator {
    Operator::modifier(
        "factorial",
        "!",
        Notation::Postfix,
        |v| v.is_integer() && (0..=MAX_FACTORIAL_ARG).contains(&v.to_integer()),
        value::factorial,
    )
}

/// Square root that only produces exact results
pub fn sqrt() -> Operator {
    Operator::modifier(
        "sqrt",
        "√",
        Notation::Prefix,
        |v| *v.numer() >= 0,
        value::exact_sqrt,
    )
}

/// Look up a built-in operator by name
pub fn builtin(name: &str) -> Option<Operator> {
    match name {
        "add" => Some(add()),
        "subtract" => Some(subtract()),
        "multiply" => Some(multiply()),
        "divide" => Some(divide()),
        "factorial" => Some(factorial()),
        "sqrt" => Some(sqrt()),
        _ => None,
    }
}
