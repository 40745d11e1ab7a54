use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::state::Path;
use crate::value::Value;

/// First path found for each terminal value. Breadth-first discovery order
/// makes the first path a shortest one.
#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    paths: HashMap<Value, Path>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `path` unless `value` already has one. Returns whether it was stored.
    pub fn record(&mut self, value: Value, path: Path) -> bool {
        match self.paths.entry(value) {
            Entry::Vacant(slot) => {
                slot.insert(path);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn lookup(&self, target: &Value) -> Option<&Path> {
        self.paths.get(target)
    }

    /// Every recorded value, ascending
    pub fn reachable(&self) -> Vec<Value> {
        let mut values: Vec<Value> = self.paths.keys().copied().collect();
        values.sort();
        values
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Path)> {
        self.paths.iter()
    }
}
