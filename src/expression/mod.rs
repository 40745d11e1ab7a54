//! Expression trees rebuilt from search paths, for display and re-checking

mod ast;
mod display;
mod errors;
mod eval;
mod replay;

pub use ast::Expression;
pub use errors::ExpressionError;
pub use replay::{Replay, replay};

#[cfg(test)]
mod tests;
