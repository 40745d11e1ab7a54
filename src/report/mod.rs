//! Reporting driver: run a search for a list of targets and render the answers

mod driver;
mod render;
mod solution;

pub use driver::{Problem, Report, TargetResult, solve, targets_in_range};
pub use solution::{Solution, TraceLine};
