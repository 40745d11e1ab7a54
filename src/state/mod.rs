//! Immutable search states, the paths that produce them, and their
//! canonical dedup keys

mod canonical;
mod path;

use std::fmt;

use crate::operators::Operator;
use crate::value::{Value, format_multiset};

pub use canonical::{CanonicalKey, canonicalize};
pub use path::{Operand, Operands, Path, Step};

/// Snapshot of the remaining values plus the operations that led here.
///
/// Values are kept sorted, so positions recorded in a [`Step`] always refer
/// to the sorted order of the parent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    values: Vec<Value>,
    path: Path,
}

impl State {
    pub fn initial(values: &[Value]) -> Self {
        let mut values = values.to_vec();
        values.sort();
        Self {
            values,
            path: Path::new(),
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of operations applied since the initial state
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_terminal(&self) -> bool {
        self.values.len() == 1
    }

    pub fn terminal_value(&self) -> Option<Value> {
        match self.values.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }

    pub fn key(&self) -> CanonicalKey {
        canonicalize(&self.values)
    }

    /// Child state where the values at `left` and `right` are replaced by
    /// `result`. Returns `None` for out-of-range or identical positions.
    pub fn join(
        &self,
        operator: &Operator,
        left: usize,
        right: usize,
        result: Value,
    ) -> Option<State> {
        if left == right {
            return None;
        }
        let left_operand = Operand::new(left, *self.values.get(left)?);
        let right_operand = Operand::new(right, *self.values.get(right)?);

        let mut values: Vec<Value> = self
            .values
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != left && *idx != right)
            .map(|(_, value)| *value)
            .collect();
        values.push(result);
        values.sort();

        Some(State {
            values,
            path: self
                .path
                .extended(Step::join(*operator, left_operand, right_operand, result)),
        })
    }

    /// Child state where the value at `position` is replaced by `result`
    pub fn modify(&self, operator: &Operator, position: usize, result: Value) -> Option<State> {
        let operand = Operand::new(position, *self.values.get(position)?);

        let mut values = self.values.clone();
        if let Some(slot) = values.get_mut(position) {
            *slot = result;
        }
        values.sort();

        Some(State {
            values,
            path: self
                .path
                .extended(Step::modifier(*operator, operand, result)),
        })
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_multiset(&self.values))
    }
}
