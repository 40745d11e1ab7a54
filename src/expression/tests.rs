use crate::expression::{Expression, ExpressionError, replay};
use crate::operators::{add, divide, factorial, multiply, sqrt, subtract};
use crate::state::{Operand, Path, State, Step};
use crate::value::Value;

fn int(n: i64) -> Value {
    Value::from_integer(n)
}

fn num(n: i64) -> Box<Expression> {
    Box::new(Expression::Number(int(n)))
}

fn join(operator: crate::Operator, left: Box<Expression>, right: Box<Expression>) -> Box<Expression> {
    Box::new(Expression::Join {
        operator,
        left,
        right,
    })
}

fn modify(operator: crate::Operator, operand: Box<Expression>) -> Box<Expression> {
    Box::new(Expression::Modifier { operator, operand })
}

#[test]
fn test_display_commutative_chain_drops_parens() {
    let expr = join(add(), num(3), join(add(), num(3), num(3)));
    assert_eq!(expr.to_string(), "3 + 3 + 3");
}

#[test]
fn test_display_keeps_parens_for_non_commutative_right() {
    let expr = join(subtract(), num(3), join(subtract(), num(3), num(3)));
    assert_eq!(expr.to_string(), "3 - (3 - 3)");

    let expr = join(subtract(), join(subtract(), num(9), num(3)), num(3));
    assert_eq!(expr.to_string(), "9 - 3 - 3");

    let expr = join(divide(), num(6), join(multiply(), num(3), num(2)));
    assert_eq!(expr.to_string(), "6 / (3 * 2)");
}

#[test]
fn test_display_precedence() {
    let expr = join(multiply(), join(add(), num(1), num(2)), num(3));
    assert_eq!(expr.to_string(), "(1 + 2) * 3");

    let expr = join(add(), num(1), join(multiply(), num(2), num(3)));
    assert_eq!(expr.to_string(), "1 + 2 * 3");
}

#[test]
fn test_display_modifiers() {
    assert_eq!(modify(sqrt(), num(9)).to_string(), "√9");
    assert_eq!(
        modify(sqrt(), join(multiply(), num(3), num(3))).to_string(),
        "√(3 * 3)"
    );
    assert_eq!(
        modify(factorial(), modify(factorial(), num(3))).to_string(),
        "(3!)!"
    );
    assert_eq!(
        join(subtract(), num(3), modify(factorial(), num(3))).to_string(),
        "3 - 3!"
    );
}

#[test]
fn test_display_non_plain_numbers() {
    assert_eq!(Expression::Number(int(-3)).to_string(), "-3");
    let expr = join(
        add(),
        Box::new(Expression::Number(int(-3))),
        Box::new(Expression::Number(Value::new(1, 2))),
    );
    assert_eq!(expr.to_string(), "(-3) + (1/2)");
}

#[test]
fn test_evaluate() {
    let expr = join(divide(), join(add(), num(3), num(3)), modify(factorial(), num(3)));
    assert_eq!(expr.evaluate(), Ok(int(1)));
    assert_eq!(expr.operation_count(), 3);
    assert_eq!(expr.leaves(), vec![int(3), int(3), int(3)]);
}

#[test]
fn test_evaluate_rejections() {
    let by_zero = join(divide(), num(3), join(subtract(), num(3), num(3)));
    assert_eq!(
        by_zero.evaluate(),
        Err(ExpressionError::Rejected {
            operator: "divide".to_string()
        })
    );

    let irrational = modify(sqrt(), num(3));
    assert!(irrational.evaluate().is_err());
}

fn path_to_one() -> Option<State> {
    State::initial(&[int(3), int(3), int(3)])
        .join(&add(), 0, 1, int(6))?
        .modify(&factorial(), 0, int(6))?
        .join(&divide(), 0, 1, int(1))
}

#[test]
fn test_replay_rebuilds_expression() {
    let state = path_to_one();
    assert!(state.is_some());
    if let Some(state) = state {
        let replayed = replay(&[int(3), int(3), int(3)], state.path());
        assert!(replayed.is_ok(), "replay failed: {:?}", replayed.err());
        if let Ok(replayed) = replayed {
            assert_eq!(replayed.expression.to_string(), "(3 + 3) / 3!");
            assert_eq!(replayed.expression.evaluate(), Ok(int(1)));
            assert_eq!(
                replayed.snapshots,
                vec![
                    vec![int(3), int(3), int(3)],
                    vec![int(3), int(6)],
                    vec![int(6), int(6)],
                    vec![int(1)],
                ]
            );
        }
    }
}

#[test]
fn test_replay_keeps_operand_order() {
    let state = State::initial(&[int(2), int(8)]).join(&divide(), 1, 0, int(4));
    assert!(state.is_some());
    if let Some(state) = state {
        let replayed = replay(&[int(8), int(2)], state.path());
        assert!(replayed.is_ok());
        if let Ok(replayed) = replayed {
            assert_eq!(replayed.expression.to_string(), "8 / 2");
        }
    }
}

#[test]
fn test_replay_of_empty_path() {
    let replayed = replay(&[int(5)], &Path::new());
    assert!(replayed.is_ok());
    if let Ok(replayed) = replayed {
        assert_eq!(replayed.expression, Expression::Number(int(5)));
    }

    assert_eq!(
        replay(&[int(5), int(6)], &Path::new()),
        Err(ExpressionError::NotTerminal { remaining: 2 })
    );
}

#[test]
fn test_replay_detects_inconsistent_paths() {
    let state = path_to_one();
    assert!(state.is_some());
    if let Some(state) = state {
        let replayed = replay(&[int(3), int(3), int(4)], state.path());
        assert!(matches!(
            replayed,
            Err(ExpressionError::OperandMismatch { .. })
        ));
    }

    let bogus = Path::new().extended(Step::join(
        add(),
        Operand::new(0, int(1)),
        Operand::new(7, int(1)),
        int(2),
    ));
    assert!(matches!(
        replay(&[int(1), int(1)], &bogus),
        Err(ExpressionError::PositionOutOfRange { .. })
    ));

    let wrong_result = Path::new().extended(Step::join(
        add(),
        Operand::new(0, int(1)),
        Operand::new(1, int(1)),
        int(3),
    ));
    assert!(matches!(
        replay(&[int(1), int(1)], &wrong_result),
        Err(ExpressionError::ResultMismatch { .. })
    ));

    let wrong_arity = Path::new().extended(Step::modifier(add(), Operand::new(0, int(1)), int(1)));
    assert!(matches!(
        replay(&[int(1)], &wrong_arity),
        Err(ExpressionError::ArityMismatch { .. })
    ));
}
