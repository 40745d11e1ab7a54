use log::{debug, info};

use crate::operators::OperatorSet;
use crate::report::solution::Solution;
use crate::search::{SearchConfig, SearchEngine, SearchError, SearchOutcome, SearchStats, Truncation};
use crate::value::Value;

/// A complete search request: what to start from, how to combine it, and
/// which values to report on
#[derive(Debug, Clone)]
pub struct Problem {
    pub input_values: Vec<Value>,
    pub operators: OperatorSet,
    pub targets: Vec<Value>,
    pub search: SearchConfig,
}

impl Problem {
    /// Standard operators and default search settings
    pub fn new(input_values: Vec<Value>, targets: Vec<Value>) -> Self {
        Self {
            input_values,
            operators: OperatorSet::standard(),
            targets,
            search: SearchConfig::default(),
        }
    }

    pub fn with_operators(mut self, operators: OperatorSet) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// # Errors
    ///
    /// Returns the configuration error [`solve`] would fail with.
    pub fn validate(&self) -> Result<(), SearchError> {
        SearchEngine::check_inputs(&self.input_values, &self.operators, &self.search)
    }
}

/// Integer targets `lower..=upper`.
///
/// # Errors
///
/// Returns an error if `lower > upper`.
pub fn targets_in_range(lower: i64, upper: i64) -> Result<Vec<Value>, SearchError> {
    if lower > upper {
        return Err(SearchError::InvalidTargetRange { lower, upper });
    }
    Ok((lower..=upper).map(Value::from_integer).collect())
}

/// Outcome for one requested target
#[derive(Debug, Clone, PartialEq)]
pub struct TargetResult {
    pub target: Value,
    pub solution: Option<Solution>,
}

impl TargetResult {
    pub fn is_found(&self) -> bool {
        self.solution.is_some()
    }
}

/// Answers for every requested target, in request order
#[derive(Debug, Clone)]
pub struct Report {
    results: Vec<TargetResult>,
    truncation: Option<Truncation>,
    stats: SearchStats,
}

impl Report {
    /// # Errors
    ///
    /// Returns a replay error if a recorded path fails verification.
    pub fn from_outcome(targets: &[Value], outcome: &SearchOutcome) -> Result<Self, SearchError> {
        let results = targets
            .iter()
            .map(|target| -> Result<TargetResult, SearchError> {
                let solution = outcome
                    .lookup(target)
                    .map(|path| Solution::from_path(outcome.initial_values(), path, *target))
                    .transpose()?;
                Ok(TargetResult {
                    target: *target,
                    solution,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            results,
            truncation: outcome.truncation(),
            stats: outcome.stats().clone(),
        })
    }

    pub fn results(&self) -> &[TargetResult] {
        &self.results
    }

    pub fn truncated(&self) -> bool {
        self.truncation.is_some()
    }

    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn get(&self, target: &Value) -> Option<&Solution> {
        self.results
            .iter()
            .find(|result| result.target == *target)
            .and_then(|result| result.solution.as_ref())
    }

    pub fn found(&self) -> impl Iterator<Item = &TargetResult> {
        self.results.iter().filter(|result| result.is_found())
    }

    pub fn unreachable(&self) -> Vec<Value> {
        self.results
            .iter()
            .filter(|result| !result.is_found())
            .map(|result| result.target)
            .collect()
    }
}

/// Run the search described by `problem` and look up every target.
///
/// # Errors
///
/// Returns an error for an invalid configuration (see
/// [`SearchEngine::new`]) or if a recorded path fails verification.
pub fn solve(problem: &Problem) -> Result<Report, SearchError> {
    let engine = SearchEngine::new(
        &problem.input_values,
        problem.operators.clone(),
        problem.search.clone(),
    )?;
    let outcome = engine.run();

    let report = Report::from_outcome(&problem.targets, &outcome)?;
    info!(
        "Found {} of {} targets",
        report.found().count(),
        report.results().len()
    );
    debug!("Unreachable targets: {:?}", report.unreachable());
    Ok(report)
}
