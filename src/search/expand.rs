use std::collections::HashSet;

use log::trace;

use crate::operators::{Operator, OperatorKind, OperatorSet};
use crate::search::filter::ValueFilter;
use crate::state::State;
use crate::value::Value;

/// Children of one state, in the order the operators produced them
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    pub children: Vec<State>,
    /// Single-value children outside the value bounds: recorded, never expanded
    pub settled: Vec<State>,
    /// Candidates dropped before the dedup check
    pub pruned: usize,
}

impl Expansion {
    /// File `child` by the bounds check on the value it just produced
    fn place(&mut self, child: State, result: &Value, filter: &ValueFilter) {
        if filter.in_bounds(result) {
            self.children.push(child);
        } else if child.is_terminal() {
            self.settled.push(child);
        } else {
            self.pruned += 1;
        }
    }
}

/// Apply every operator to every operand combination of `state`.
///
/// Operators run in registration order. A non-commutative join tries both
/// orderings of each pair, a commutative one only `left < right`. An
/// operator is never applied twice to the same operand values within one
/// expansion, and a modifier that returns its operand unchanged is dropped.
/// A produced value outside the bounds only survives when it is the last
/// value left.
pub fn expand(state: &State, operators: &OperatorSet, filter: &ValueFilter) -> Expansion {
    let mut expansion = Expansion::default();

    for operator in operators {
        match operator.kind() {
            OperatorKind::Join { commutative, .. } => {
                expand_join(state, operator, *commutative, filter, &mut expansion)
            }
            OperatorKind::Modifier { .. } => expand_modifier(state, operator, filter, &mut expansion),
        }
    }

    expansion
}

fn expand_join(
    state: &State,
    operator: &Operator,
    commutative: bool,
    filter: &ValueFilter,
    expansion: &mut Expansion,
) {
    let values = state.values();
    let mut tried: HashSet<(Value, Value)> = HashSet::new();

    for (left, &a) in values.iter().enumerate() {
        for (right, &b) in values.iter().enumerate() {
            if left == right || (commutative && right < left) || !tried.insert((a, b)) {
                continue;
            }

            match operator.apply_join(a, b) {
                Some(result) if filter.accepts(&result) => {
                    if let Some(child) = state.join(operator, left, right, result) {
                        expansion.place(child, &result, filter);
                    }
                }
                candidate => {
                    trace!(
                        "Pruned {} {} {} -> {:?}",
                        a,
                        operator.symbol(),
                        b,
                        candidate
                    );
                    expansion.pruned += 1;
                }
            }
        }
    }
}

fn expand_modifier(
    state: &State,
    operator: &Operator,
    filter: &ValueFilter,
    expansion: &mut Expansion,
) {
    let mut tried: HashSet<Value> = HashSet::new();

    for (position, &operand) in state.values().iter().enumerate() {
        if !tried.insert(operand) {
            continue;
        }

        match operator.apply_modifier(operand) {
            Some(result) if result != operand && filter.accepts(&result) => {
                if let Some(child) = state.modify(operator, position, result) {
                    expansion.place(child, &result, filter);
                }
            }
            candidate => {
                trace!(
                    "Pruned {}({}) -> {:?}",
                    operator.name(),
                    operand,
                    candidate
                );
                expansion.pruned += 1;
            }
        }
    }
}
