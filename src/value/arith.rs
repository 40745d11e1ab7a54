use crate::value::Value;

/// Largest argument whose factorial still fits in an `i64` (20! < 2^63 < 21!)
pub const MAX_FACTORIAL_ARG: i64 = 20;

/// Square root that only succeeds when the result is rational.
///
/// Numerator and denominator must both be perfect squares; irrational roots
/// are rejected rather than approximated.
pub fn exact_sqrt(value: Value) -> Option<Value> {
    if *value.numer() < 0 {
        return None;
    }

    let numer = exact_integer_sqrt(*value.numer())?;
    let denom = exact_integer_sqrt(*value.denom())?;
    Some(Value::new(numer, denom))
}

#[inline]
fn exact_integer_sqrt(n: i64) -> Option<i64> {
    let root = n.isqrt();
    (root.checked_mul(root)? == n).then_some(root)
}

/// `n!` for integers in `0..=MAX_FACTORIAL_ARG`; `None` for anything else
pub fn factorial(value: Value) -> Option<Value> {
    if !value.is_integer() {
        return None;
    }

    let n = value.to_integer();
    if !(0..=MAX_FACTORIAL_ARG).contains(&n) {
        return None;
    }

    (2..=n)
        .try_fold(1_i64, |acc, k| acc.checked_mul(k))
        .map(Value::from_integer)
}
