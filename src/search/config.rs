use std::time::Duration;

use log::debug;

use crate::search::constants::{DEFAULT_MAX_NODES, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};
use crate::search::errors::SearchError;
use crate::search::filter::ValueFilter;
use crate::value::Value;

/// Budgets and pruning rules for one search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Stop after expanding this many states
    pub max_nodes: Option<usize>,
    /// States this many operations deep are not expanded
    pub max_depth: Option<usize>,
    /// Wall-clock budget, checked between expansion batches
    pub time_limit: Option<Duration>,
    /// Produced values below this are pruned
    pub min_value: Value,
    /// Produced values above this are pruned
    pub max_value: Value,
    /// Prune produced values that are not integers
    pub integers_only: bool,
    /// Expand frontier batches on the rayon thread pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_nodes: Some(DEFAULT_MAX_NODES),
            max_depth: None,
            time_limit: None,
            min_value: Value::from_integer(DEFAULT_MIN_VALUE),
            max_value: Value::from_integer(DEFAULT_MAX_VALUE),
            integers_only: true,
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// # Errors
    ///
    /// Returns an error for a zero node budget or inverted value bounds.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_nodes == Some(0) {
            debug!("Rejecting zero node budget");
            return Err(SearchError::ZeroNodeBudget);
        }
        if self.min_value > self.max_value {
            debug!(
                "Rejecting inverted bounds {}..{}",
                self.min_value, self.max_value
            );
            return Err(SearchError::InvalidBounds {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    pub fn filter(&self) -> ValueFilter {
        ValueFilter::new(self.min_value, self.max_value, self.integers_only)
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_bounds(mut self, min_value: Value, max_value: Value) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_integers_only(mut self, integers_only: bool) -> Self {
        self.integers_only = integers_only;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
