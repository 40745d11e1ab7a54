use crate::value::Value;

/// A non-negative integer, which never needs parentheses when nested
#[inline]
pub fn is_plain(value: &Value) -> bool {
    value.is_integer() && *value.numer() >= 0
}

/// Render a value used as an operand: negatives and fractions are parenthesized
pub fn format_operand(value: &Value) -> String {
    if is_plain(value) {
        value.to_string()
    } else {
        format!("({})", value)
    }
}

/// Render a multiset of values as `[3, 3, 6]`
pub fn format_multiset(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
