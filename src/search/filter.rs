use crate::value::Value;

/// Integrality every produced value must satisfy, and the bounds an
/// intermediate value must stay within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFilter {
    min: Value,
    max: Value,
    integers_only: bool,
}

impl ValueFilter {
    pub fn new(min: Value, max: Value, integers_only: bool) -> Self {
        Self {
            min,
            max,
            integers_only,
        }
    }

    /// Integrality only; a final value is kept whenever this holds
    pub fn accepts(&self, value: &Value) -> bool {
        !self.integers_only || value.is_integer()
    }

    pub fn in_bounds(&self, value: &Value) -> bool {
        *value >= self.min && *value <= self.max
    }
}
