//! Threes solver - breadth-first search over combinations of numbers
//!
//! Starting from a multiset of values, the search repeatedly joins two values
//! with a binary operator or transforms one with a unary operator, and keeps
//! the shortest path to every single value it can reach. The classic use is
//! the "three 3s" puzzle: which of 1..=10 can be made from `3, 3, 3` with
//! `+ - * / ! √`?

pub mod expression;
pub mod operators;
pub mod report;
pub mod search;
pub mod state;
pub mod value;

// Re-export the main public API
pub use expression::{Expression, ExpressionError};
pub use operators::{Notation, Operator, OperatorError, OperatorKind, OperatorSet};
pub use report::{Problem, Report, Solution, TargetResult, solve, targets_in_range};
pub use search::{SearchConfig, SearchEngine, SearchError, SearchOutcome, Truncation};
pub use state::{CanonicalKey, Path, State, Step};
pub use value::{Value, ValueError, parse_value, parse_values};

/// Find the shortest way to make `target` from `values`
///
/// This is a convenience function that searches with the standard operators
/// and the default configuration.
///
/// # Arguments
///
/// * `values` - The starting multiset; every value must be used
/// * `target` - The value to make
///
/// # Returns
///
/// * `Ok(Some(Solution))` - If the target is reachable
/// * `Ok(None)` - If it is not reachable within the default search
/// * `Err(SearchError)` - If the input is empty
///
/// # Errors
///
/// This function will return an error if `values` is empty.
///
/// # Examples
///
/// ```
/// use threes_solver::{Value, find_solution};
///
/// let threes = [Value::from_integer(3); 3];
/// match find_solution(&threes, Value::from_integer(7)) {
///     Ok(Some(solution)) => println!("7 = {}", solution.expression()),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solution(values: &[Value], target: Value) -> Result<Option<Solution>, SearchError> {
    let problem = Problem::new(values.to_vec(), vec![target]);
    let report = solve(&problem)?;
    Ok(report.get(&target).cloned())
}
