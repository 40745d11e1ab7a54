use std::fmt;

use crate::value::{Value, format_multiset};

/// Order-insensitive identity of a state's remaining values. Two states with
/// equal keys are interchangeable for the rest of the search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(Vec<Value>);

impl CanonicalKey {
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn canonicalize(values: &[Value]) -> CanonicalKey {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    CanonicalKey(sorted)
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_multiset(&self.0))
    }
}
