use std::collections::HashMap;
use std::time::Duration;

use crate::expression::replay;
use crate::operators::{OperatorSet, divide};
use crate::search::{
    Phase, ResultCollector, SearchConfig, SearchEngine, SearchError, SearchOutcome, Truncation,
    ValueFilter, expand,
};
use crate::state::{Operands, Path, State};
use crate::value::Value;

fn int(n: i64) -> Value {
    Value::from_integer(n)
}

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(int).collect()
}

fn search(values: &[i64], config: SearchConfig) -> Option<SearchOutcome> {
    SearchEngine::new(&ints(values), OperatorSet::standard(), config)
        .ok()
        .map(SearchEngine::run)
}

#[test]
fn test_threes_reach_one_through_nine() {
    let outcome = search(&[3, 3, 3], SearchConfig::default());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert!(!outcome.is_truncated());
        for target in 1..=9 {
            assert!(
                outcome.lookup(&int(target)).is_some(),
                "expected a path to {}",
                target
            );
        }
        assert!(outcome.lookup(&int(10)).is_none());
    }
}

#[test]
fn test_threes_path_lengths() {
    let outcome = search(&[3, 3, 3], SearchConfig::default());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert_eq!(outcome.lookup(&int(9)).map(Path::len), Some(2));
        assert_eq!(outcome.lookup(&int(1)).map(Path::len), Some(3));
        assert_eq!(outcome.lookup(&int(8)).map(Path::len), Some(4));
    }
}

#[test]
fn test_ones_reach_four_by_addition() {
    let outcome = search(&[1, 1, 1, 1], SearchConfig::default());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        let path = outcome.lookup(&int(4));
        assert!(path.is_some());
        if let Some(path) = path {
            assert_eq!(path.len(), 3);
            assert!(path.iter().all(|step| step.operator().name() == "add"));
            let replayed = replay(outcome.initial_values(), path);
            assert!(replayed.is_ok());
            if let Ok(replayed) = replayed {
                assert_eq!(replayed.expression.to_string(), "1 + 1 + 1 + 1");
            }
        }
    }
}

#[test]
fn test_exhaustive_search_expands_each_key_once() {
    let outcome = search(&[3, 3, 3], SearchConfig::default());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        let stats = outcome.stats();
        assert_eq!(stats.expanded, stats.discovered);
        assert_eq!(stats.discovered, 44);
    }
}

#[test]
fn test_count_invariant_along_every_path() {
    let outcome = search(&[3, 3, 3], SearchConfig::default());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        for (value, path) in outcome.collector().iter() {
            let replayed = replay(outcome.initial_values(), path);
            assert!(replayed.is_ok(), "path to {} does not replay", value);
            if let Ok(replayed) = replayed {
                for (step, pair) in path.iter().zip(replayed.snapshots.windows(2)) {
                    if let [before, after] = pair {
                        assert_eq!(after.len() + step.consumed(), before.len());
                    }
                }
                assert_eq!(replayed.snapshots.last().map(Vec::len), Some(1));
                assert_eq!(replayed.expression.evaluate(), Ok(*value));
            }
        }
    }
}

fn note_terminal(state: &State, depths: &mut HashMap<Value, usize>) {
    if let Some(value) = state.terminal_value() {
        let entry = depths.entry(value).or_insert(state.depth());
        *entry = (*entry).min(state.depth());
    }
}

/// Minimum operation count per terminal value, found without any dedup
fn brute_force_depths(
    state: &State,
    operators: &OperatorSet,
    filter: &ValueFilter,
    max_depth: usize,
    depths: &mut HashMap<Value, usize>,
) {
    note_terminal(state, depths);
    if state.depth() == max_depth {
        return;
    }
    let expansion = expand(state, operators, filter);
    for child in &expansion.settled {
        note_terminal(child, depths);
    }
    for child in &expansion.children {
        brute_force_depths(child, operators, filter, max_depth, depths);
    }
}

#[test]
fn test_recorded_paths_are_minimal() {
    let config = SearchConfig::default();
    let operators = OperatorSet::standard();
    let outcome = search(&[3, 3, 3], config.clone());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        let max_depth = 4;
        let mut depths = HashMap::new();
        brute_force_depths(
            &State::initial(&ints(&[3, 3, 3])),
            &operators,
            &config.filter(),
            max_depth,
            &mut depths,
        );
        assert!(!depths.is_empty());

        for (value, depth) in &depths {
            assert_eq!(
                outcome.lookup(value).map(Path::len),
                Some(*depth),
                "non-minimal path to {}",
                value
            );
        }
        for (value, path) in outcome.collector().iter() {
            if path.len() <= max_depth {
                assert_eq!(depths.get(value), Some(&path.len()));
            }
        }
    }
}

#[test]
fn test_out_of_bounds_final_values_are_recorded() {
    let outcome = search(&[3, 3, 3], SearchConfig::default());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert_eq!(outcome.lookup(&int(-3)).map(Path::len), Some(2));
        assert!(outcome.lookup(&int(216)).is_some());
        assert!(outcome.stats().settled > 0);
        assert_eq!(outcome.stats().expanded, outcome.stats().discovered);
    }

    let outcome = search(&[5], SearchConfig::default());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert!(!outcome.is_truncated());
        assert_eq!(outcome.reachable(), ints(&[5, 120]));
        assert_eq!(outcome.stats().expanded, 1);
    }
}

#[test]
fn test_out_of_bounds_intermediate_states_are_pruned() {
    let state = State::initial(&ints(&[3, 50, 60]));
    let expansion = expand(&state, &OperatorSet::arithmetic(), &SearchConfig::default().filter());
    assert!(expansion.settled.is_empty());
    assert!(
        expansion
            .children
            .iter()
            .all(|child| child.values().iter().all(|v| *v <= int(100)))
    );
    assert!(expansion.pruned > 0);

    let pair = State::initial(&ints(&[50, 60]));
    let expansion = expand(&pair, &OperatorSet::arithmetic(), &SearchConfig::default().filter());
    let settled: Vec<_> = expansion
        .settled
        .iter()
        .filter_map(State::terminal_value)
        .collect();
    assert_eq!(settled, ints(&[110, -10, 3000]));
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = search(&[3, 3, 3], SearchConfig::default());
    let second = search(&[3, 3, 3], SearchConfig::default());
    let sequential = search(&[3, 3, 3], SearchConfig::default().with_parallel(false));
    assert!(first.is_some() && second.is_some() && sequential.is_some());
    if let (Some(first), Some(second), Some(sequential)) = (first, second, sequential) {
        assert_eq!(first.reachable(), second.reachable());
        assert_eq!(first.reachable(), sequential.reachable());
        for value in first.reachable() {
            assert_eq!(first.lookup(&value), second.lookup(&value));
            assert_eq!(first.lookup(&value), sequential.lookup(&value));
        }
        assert_eq!(first.truncation(), sequential.truncation());
        assert_eq!(first.stats().expanded, sequential.stats().expanded);
    }
}

#[test]
fn test_never_divides_by_zero() {
    let state = State::initial(&ints(&[0, 3]));
    let only_divide = OperatorSet::empty().with(divide());
    assert!(only_divide.is_ok());
    if let Ok(only_divide) = only_divide {
        let expansion = expand(&state, &only_divide, &SearchConfig::default().filter());
        assert_eq!(expansion.children.len(), 1);
        assert_eq!(expansion.pruned, 1);
        assert_eq!(
            expansion.children.first().and_then(State::terminal_value),
            Some(int(0))
        );
    }

    let outcome = search(&[0, 3, 3], SearchConfig::default());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        for (_, path) in outcome.collector().iter() {
            for step in path.iter() {
                if step.operator().name() == "divide"
                    && let Operands::Join { right, .. } = step.operands()
                {
                    assert_ne!(right.value, int(0));
                }
            }
        }
    }
}

#[test]
fn test_single_node_budget() {
    let outcome = search(&[3, 3, 3], SearchConfig::default().with_max_nodes(Some(1)));
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert_eq!(outcome.truncation(), Some(Truncation::NodeBudget));
        assert_eq!(outcome.stats().expanded, 1);
        assert!(outcome.reachable().is_empty());
    }

    let outcome = search(&[3, 3], SearchConfig::default().with_max_nodes(Some(1)));
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert!(outcome.is_truncated());
        assert_eq!(outcome.reachable(), ints(&[0, 1, 6, 9]));
        assert!(outcome.lookup(&int(3)).is_none());
    }
}

#[test]
fn test_depth_limit() {
    let outcome = search(&[3, 3, 3], SearchConfig::default().with_max_depth(Some(2)));
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert_eq!(outcome.truncation(), Some(Truncation::DepthLimit));
        assert!(outcome.lookup(&int(9)).is_some());
        assert!(outcome.lookup(&int(8)).is_none());
        assert!(outcome.stats().depth_limited > 0);
    }
}

#[test]
fn test_generous_depth_limit_is_not_truncation() {
    let outcome = search(&[3, 3], SearchConfig::default().with_max_depth(Some(50)));
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert!(!outcome.is_truncated());
    }
}

#[test]
fn test_zero_time_limit_stops_before_expanding() {
    let outcome = search(
        &[3, 3, 3],
        SearchConfig::default().with_time_limit(Some(Duration::ZERO)),
    );
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert_eq!(outcome.truncation(), Some(Truncation::TimeLimit));
        assert_eq!(outcome.stats().expanded, 0);
    }
}

#[test]
fn test_single_value_input_terminates() {
    let outcome = search(&[4], SearchConfig::default());
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert!(!outcome.is_truncated());
        assert_eq!(outcome.reachable(), ints(&[2, 4, 24]));
        assert_eq!(outcome.lookup(&int(4)), Some(&Path::new()));
    }

    let unbounded = SearchConfig::default()
        .with_bounds(int(-1_000_000), int(1_000_000))
        .with_integers_only(false)
        .with_max_nodes(None);
    let outcome = search(&[65536], unbounded);
    assert!(outcome.is_some());
    if let Some(outcome) = outcome {
        assert!(!outcome.is_truncated());
        for root in [256, 16, 4, 2] {
            assert!(outcome.lookup(&int(root)).is_some(), "missing {}", root);
        }
    }
}

#[test]
fn test_fractions_widen_the_reachable_set() {
    let integers = search(&[1, 2], SearchConfig::default());
    let fractions = search(&[1, 2], SearchConfig::default().with_integers_only(false));
    assert!(integers.is_some() && fractions.is_some());
    if let (Some(integers), Some(fractions)) = (integers, fractions) {
        assert!(integers.lookup(&Value::new(1, 2)).is_none());
        assert!(fractions.lookup(&Value::new(1, 2)).is_some());
    }
}

#[test]
fn test_configuration_errors() {
    assert!(matches!(
        SearchEngine::new(&[], OperatorSet::standard(), SearchConfig::default()),
        Err(SearchError::EmptyInput)
    ));
    assert!(matches!(
        SearchEngine::new(&ints(&[3]), OperatorSet::empty(), SearchConfig::default()),
        Err(SearchError::NoOperators)
    ));
    assert!(matches!(
        SearchEngine::new(
            &ints(&[3]),
            OperatorSet::standard(),
            SearchConfig::default().with_max_nodes(Some(0))
        ),
        Err(SearchError::ZeroNodeBudget)
    ));
    assert!(matches!(
        SearchEngine::new(
            &ints(&[3]),
            OperatorSet::standard(),
            SearchConfig::default().with_bounds(int(5), int(1))
        ),
        Err(SearchError::InvalidBounds { .. })
    ));
}

#[test]
fn test_engine_starts_in_init_phase() {
    let engine = SearchEngine::new(&ints(&[3, 3]), OperatorSet::standard(), SearchConfig::default());
    assert!(engine.is_ok());
    if let Ok(engine) = engine {
        assert_eq!(engine.phase(), Phase::Init);
    }
}

#[test]
fn test_collector_first_write_wins() {
    let mut collector = ResultCollector::new();
    let short = Path::new();
    let state = State::initial(&ints(&[1, 1]));
    let long = state
        .join(&crate::operators::multiply(), 0, 1, int(1))
        .map(|s| s.path().clone());
    assert!(long.is_some());
    if let Some(long) = long {
        assert!(collector.record(int(1), short.clone()));
        assert!(!collector.record(int(1), long));
        assert_eq!(collector.lookup(&int(1)), Some(&short));
        assert_eq!(collector.len(), 1);
        assert!(collector.lookup(&int(2)).is_none());
    }
}

#[test]
fn test_value_filter() {
    let filter = ValueFilter::new(int(0), int(100), true);
    assert!(filter.accepts(&int(500)));
    assert!(!filter.in_bounds(&int(500)));
    assert!(!filter.accepts(&Value::new(1, 2)));
    assert!(filter.in_bounds(&int(0)));
    assert!(filter.in_bounds(&int(100)));
    assert!(!filter.in_bounds(&int(101)));
    assert!(!filter.in_bounds(&int(-1)));

    let rational = ValueFilter::new(int(-10), int(10), false);
    assert!(rational.accepts(&Value::new(-1, 2)));
    assert!(rational.in_bounds(&Value::new(-1, 2)));
}
