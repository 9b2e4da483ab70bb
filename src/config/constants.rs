// Bounds and defaults for the visualizer controls

/// Smallest array the size slider allows
pub const MIN_ARRAY_SIZE: usize = 5;

/// Largest array the size slider allows
pub const MAX_ARRAY_SIZE: usize = 30;

pub const DEFAULT_ARRAY_SIZE: usize = 15;

/// Fastest tick interval in milliseconds
pub const MIN_SPEED_MS: u64 = 10;

/// Slowest tick interval in milliseconds
pub const MAX_SPEED_MS: u64 = 500;

/// Speed slider increment
pub const SPEED_STEP_MS: u64 = 10;

/// Higher is slower
pub const DEFAULT_SPEED_MS: u64 = 100;

/// Default lower bound for generated element values
pub const MIN_VALUE: u32 = 10;

/// Default upper bound for generated element values (also the bar chart scale)
pub const MAX_VALUE: u32 = 100;

/// Lowest accepted `--min-value`
pub const MIN_VALUE_FLOOR: u32 = 1;
