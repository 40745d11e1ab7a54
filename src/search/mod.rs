//! Breadth-first search over multisets of remaining values

mod collector;
mod config;
pub mod constants;
mod engine;
mod errors;
mod expand;
mod filter;
mod outcome;

pub use collector::ResultCollector;
pub use config::SearchConfig;
pub use engine::{Phase, SearchEngine};
pub use errors::SearchError;
pub use expand::{Expansion, expand};
pub use filter::ValueFilter;
pub use outcome::{SearchOutcome, SearchStats, Truncation};

#[cfg(test)]
mod tests;
