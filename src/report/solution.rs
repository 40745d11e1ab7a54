use std::fmt;

use crate::expression::{Expression, ExpressionError, replay};
use crate::search::SearchError;
use crate::state::{Path, Step};
use crate::value::{Value, format_multiset};

/// One step of a solution together with the multisets around it
#[derive(Debug, Clone, PartialEq)]
pub struct TraceLine {
    pub before: Vec<Value>,
    pub step: Step,
    pub after: Vec<Value>,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let positions: Vec<String> = self
            .step
            .positions()
            .iter()
            .map(ToString::to_string)
            .collect();
        write!(
            f,
            "{}  {}  (positions {})  -> {}",
            format_multiset(&self.before),
            self.step,
            positions.join(", "),
            format_multiset(&self.after)
        )
    }
}

/// A verified way of producing a target value
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    path: Path,
    expression: Expression,
    trace: Vec<TraceLine>,
}

impl Solution {
    /// Replay `path` from `initial` and check that it evaluates to `target`.
    ///
    /// # Errors
    ///
    /// Returns a replay error if the path is inconsistent with `initial` or
    /// does not produce `target`.
    pub fn from_path(initial: &[Value], path: &Path, target: Value) -> Result<Self, SearchError> {
        let replayed = replay(initial, path)?;

        let value = replayed.expression.evaluate()?;
        if value != target {
            return Err(ExpressionError::ResultMismatch {
                step: path.len(),
                expected: target,
                found: value,
            }
            .into());
        }

        let trace = path
            .iter()
            .zip(replayed.snapshots.windows(2))
            .filter_map(|(step, pair)| match pair {
                [before, after] => Some(TraceLine {
                    before: before.clone(),
                    step: step.clone(),
                    after: after.clone(),
                }),
                _ => None,
            })
            .collect();

        Ok(Self {
            path: path.clone(),
            expression: replayed.expression,
            trace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn trace(&self) -> &[TraceLine] {
        &self.trace
    }

    /// Number of operations applied
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
