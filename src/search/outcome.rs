use std::fmt;
use std::time::Duration;

use crate::search::collector::ResultCollector;
use crate::state::Path;
use crate::value::Value;

/// Why a search stopped before the frontier emptied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    NodeBudget,
    DepthLimit,
    TimeLimit,
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truncation::NodeBudget => write!(f, "node budget reached"),
            Truncation::DepthLimit => write!(f, "depth limit reached"),
            Truncation::TimeLimit => write!(f, "time limit reached"),
        }
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// States dequeued and expanded
    pub expanded: usize,
    /// Distinct canonical keys queued for expansion, the initial state included
    pub discovered: usize,
    /// Out-of-bounds final values recorded without being queued
    pub settled: usize,
    /// Children dropped because their key was already visited
    pub duplicates: usize,
    /// Candidates dropped before the visited check
    pub pruned: usize,
    /// States left unexpanded by the depth limit
    pub depth_limited: usize,
    /// Deepest level discovered
    pub deepest: usize,
    pub elapsed: Duration,
}

/// Everything a finished search reports
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub(crate) initial: Vec<Value>,
    pub(crate) collector: ResultCollector,
    pub(crate) truncation: Option<Truncation>,
    pub(crate) stats: SearchStats,
}

impl SearchOutcome {
    /// The input values, sorted
    pub fn initial_values(&self) -> &[Value] {
        &self.initial
    }

    pub fn collector(&self) -> &ResultCollector {
        &self.collector
    }

    pub fn lookup(&self, target: &Value) -> Option<&Path> {
        self.collector.lookup(target)
    }

    pub fn reachable(&self) -> Vec<Value> {
        self.collector.reachable()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncation.is_some()
    }

    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
