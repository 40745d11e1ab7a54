use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use threes_solver::search::constants::{DEFAULT_MAX_NODES, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};
use threes_solver::{
    OperatorSet, Problem, SearchConfig, parse_value, parse_values, solve, targets_in_range,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Built-in operators selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperatorName {
    Add,
    Subtract,
    Multiply,
    Divide,
    Factorial,
    Sqrt,
}

impl OperatorName {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorName::Add => "add",
            OperatorName::Subtract => "subtract",
            OperatorName::Multiply => "multiply",
            OperatorName::Divide => "divide",
            OperatorName::Factorial => "factorial",
            OperatorName::Sqrt => "sqrt",
        }
    }
}

/// Threes - find every number reachable from a tuple of numbers
#[derive(Parser, Debug)]
#[command(name = "threes")]
#[command(about = "Breadth-first search for the shortest way to make each target from a tuple of numbers")]
#[command(version)]
pub struct CliArgs {
    /// Starting tuple, comma separated (any length)
    #[arg(default_value = "3,3,3", allow_hyphen_values = true)]
    pub values: String,

    /// Lowest integer target to report
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub lower: i64,

    /// Highest integer target to report
    #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
    pub upper: i64,

    /// Explicit comma separated targets (overrides --lower/--upper)
    #[arg(long, allow_hyphen_values = true)]
    pub targets: Option<String>,

    /// Operators to use (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub operators: Vec<OperatorName>,

    /// Maximum number of states to expand
    #[arg(long, default_value_t = DEFAULT_MAX_NODES)]
    pub max_nodes: usize,

    /// Maximum number of operations in a path
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Wall-clock budget in milliseconds
    #[arg(long)]
    pub time_limit_ms: Option<u64>,

    /// Intermediate values below this are discarded
    #[arg(long, default_value_t = DEFAULT_MIN_VALUE.to_string(), allow_hyphen_values = true)]
    pub min_value: String,

    /// Intermediate values above this are discarded
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE.to_string(), allow_hyphen_values = true)]
    pub max_value: String,

    /// Keep non-integer intermediate values
    #[arg(long)]
    pub fractions: bool,

    /// Expand states on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Turn parsed arguments into a search problem
pub fn build_problem(args: &CliArgs) -> Result<Problem> {
    let input_values = parse_values(&args.values).context("Invalid starting tuple")?;

    let targets = match &args.targets {
        Some(list) => parse_values(list).context("Invalid --targets")?,
        None => targets_in_range(args.lower, args.upper).context("Invalid target range")?,
    };

    let operators = if args.operators.is_empty() {
        OperatorSet::standard()
    } else {
        let names: Vec<&str> = args.operators.iter().map(OperatorName::as_str).collect();
        OperatorSet::from_names(&names).context("Invalid --operators")?
    };

    let search = SearchConfig::default()
        .with_max_nodes(Some(args.max_nodes))
        .with_max_depth(args.max_depth)
        .with_time_limit(args.time_limit_ms.map(Duration::from_millis))
        .with_bounds(
            parse_value(&args.min_value).context("Invalid --min-value")?,
            parse_value(&args.max_value).context("Invalid --max-value")?,
        )
        .with_integers_only(!args.fractions)
        .with_parallel(!args.sequential);

    let problem = Problem {
        input_values,
        operators,
        targets,
        search,
    };
    problem.validate().context("Invalid search configuration")?;
    Ok(problem)
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let problem = build_problem(&args)?;
    info!(
        "Searching from '{}' for {} targets",
        args.values,
        problem.targets.len()
    );

    let report = solve(&problem).context("Search failed")?;
    if report.truncated() {
        warn!("Search was truncated; unreachable targets may still be reachable");
    }

    println!("{}", report);
    Ok(())
}
