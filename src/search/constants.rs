// Defaults for the search configuration
pub const DEFAULT_MAX_NODES: usize = 1_000_000;
pub const DEFAULT_MIN_VALUE: i64 = 0;
pub const DEFAULT_MAX_VALUE: i64 = 100;
pub const EXPANSION_BATCH_SIZE: usize = 256;
