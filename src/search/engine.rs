use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::operators::OperatorSet;
use crate::search::collector::ResultCollector;
use crate::search::config::SearchConfig;
use crate::search::constants::EXPANSION_BATCH_SIZE;
use crate::search::errors::SearchError;
use crate::search::expand::{Expansion, expand};
use crate::search::filter::ValueFilter;
use crate::search::outcome::{SearchOutcome, SearchStats, Truncation};
use crate::state::{CanonicalKey, Path, State};
use crate::value::Value;

/// Lifecycle of a [`SearchEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Running,
    Done,
}

/// Level-order search from one initial state.
///
/// The frontier and the visited set belong to the engine, so every search
/// starts from a clean slate. A key is marked visited when it is enqueued,
/// which means no key is ever expanded twice and the first path to any
/// multiset is a shortest one.
#[derive(Debug)]
pub struct SearchEngine {
    initial: State,
    operators: OperatorSet,
    config: SearchConfig,
    filter: ValueFilter,
    frontier: VecDeque<State>,
    visited: HashSet<CanonicalKey>,
    collector: ResultCollector,
    stats: SearchStats,
    phase: Phase,
    depth_truncated: bool,
}

impl SearchEngine {
    /// # Errors
    ///
    /// Returns an error if the input is empty, the operator set is empty or
    /// inconsistent, or the configuration is invalid.
    pub fn new(
        values: &[Value],
        operators: OperatorSet,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        Self::check_inputs(values, &operators, &config)?;

        let filter = config.filter();
        Ok(Self {
            initial: State::initial(values),
            operators,
            config,
            filter,
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            collector: ResultCollector::new(),
            stats: SearchStats::default(),
            phase: Phase::Init,
            depth_truncated: false,
        })
    }

    /// Validate a search setup without building an engine.
    ///
    /// # Errors
    ///
    /// Same as [`SearchEngine::new`].
    pub fn check_inputs(
        values: &[Value],
        operators: &OperatorSet,
        config: &SearchConfig,
    ) -> Result<(), SearchError> {
        if values.is_empty() {
            warn!("Refusing to search an empty input collection");
            return Err(SearchError::EmptyInput);
        }
        if operators.is_empty() {
            warn!("Refusing to search without operators");
            return Err(SearchError::NoOperators);
        }
        operators.validate()?;
        config.validate()?;
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run to frontier exhaustion or until a budget is hit
    pub fn run(mut self) -> SearchOutcome {
        let started = Instant::now();
        self.seed();

        self.phase = Phase::Running;
        info!(
            "Searching from {} with {} operators",
            self.initial,
            self.operators.len()
        );

        let mut truncation = None;
        while !self.frontier.is_empty() {
            if let Some(reason) = self.budget_exhausted(started) {
                warn!(
                    "Stopping search: {} ({} states still queued)",
                    reason,
                    self.frontier.len()
                );
                truncation = Some(reason);
                break;
            }

            let batch_size = self.next_batch_size();
            let batch: Vec<State> = self.frontier.drain(..batch_size).collect();
            let expansions = self.expand_batch(&batch);
            for (parent, expansion) in batch.iter().zip(expansions) {
                self.merge(parent, expansion);
            }
        }

        if truncation.is_none() && self.depth_truncated {
            warn!("Search stopped at the depth limit");
            truncation = Some(Truncation::DepthLimit);
        }

        self.phase = Phase::Done;
        self.stats.elapsed = started.elapsed();
        info!(
            "Search finished: {} expanded, {} discovered, {} reachable values{}",
            self.stats.expanded,
            self.stats.discovered,
            self.collector.len(),
            if truncation.is_some() {
                " (truncated)"
            } else {
                ""
            }
        );

        SearchOutcome {
            initial: self.initial.values().to_vec(),
            collector: self.collector,
            truncation,
            stats: self.stats,
        }
    }

    fn seed(&mut self) {
        let initial = self.initial.clone();
        self.visited.insert(initial.key());
        self.stats.discovered = 1;
        if let Some(value) = initial.terminal_value() {
            self.collector.record(value, Path::new());
        }
        self.frontier.push_back(initial);
    }

    fn budget_exhausted(&self, started: Instant) -> Option<Truncation> {
        if self
            .config
            .max_nodes
            .is_some_and(|limit| self.stats.expanded >= limit)
        {
            return Some(Truncation::NodeBudget);
        }
        if self
            .config
            .time_limit
            .is_some_and(|limit| started.elapsed() >= limit)
        {
            return Some(Truncation::TimeLimit);
        }
        None
    }

    fn next_batch_size(&self) -> usize {
        let remaining = self
            .config
            .max_nodes
            .map_or(usize::MAX, |limit| limit.saturating_sub(self.stats.expanded));
        EXPANSION_BATCH_SIZE
            .min(remaining)
            .min(self.frontier.len())
            .max(1)
    }

    /// Children are computed in parallel but returned in batch order, so the
    /// merge sees them exactly as a sequential loop would.
    fn expand_batch(&self, batch: &[State]) -> Vec<Expansion> {
        let operators = &self.operators;
        let filter = &self.filter;
        if self.config.parallel && batch.len() > 1 {
            batch
                .par_iter()
                .map(|state| expand(state, operators, filter))
                .collect()
        } else {
            batch
                .iter()
                .map(|state| expand(state, operators, filter))
                .collect()
        }
    }

    fn merge(&mut self, parent: &State, expansion: Expansion) {
        self.stats.pruned += expansion.pruned;

        if self
            .config
            .max_depth
            .is_some_and(|limit| parent.depth() >= limit)
        {
            self.stats.depth_limited += 1;
            if expansion
                .children
                .iter()
                .chain(&expansion.settled)
                .any(|child| !self.visited.contains(&child.key()))
            {
                self.depth_truncated = true;
            }
            return;
        }

        self.stats.expanded += 1;
        for child in expansion.children {
            if !self.visited.insert(child.key()) {
                self.stats.duplicates += 1;
                continue;
            }

            self.stats.discovered += 1;
            if child.depth() > self.stats.deepest {
                self.stats.deepest = child.depth();
                debug!(
                    "Reached depth {} ({} states queued)",
                    self.stats.deepest,
                    self.frontier.len()
                );
            }

            if let Some(value) = child.terminal_value()
                && self.collector.record(value, child.path().clone())
            {
                debug!("Discovered {} via {}", value, child.path());
            }

            self.frontier.push_back(child);
        }

        for child in expansion.settled {
            if !self.visited.insert(child.key()) {
                self.stats.duplicates += 1;
                continue;
            }

            self.stats.settled += 1;
            if let Some(value) = child.terminal_value()
                && self.collector.record(value, child.path().clone())
            {
                debug!("Discovered {} via {} (out of bounds)", value, child.path());
            }
        }
    }
}
