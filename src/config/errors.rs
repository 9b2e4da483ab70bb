//! Configuration error types
//!
//! [`ConfigError`] covers every way command-line input can fall outside the
//! ranges the visualizer supports. These are reported before the terminal is
//! taken over; once the TUI is running, control requests that do not apply
//! are ignored rather than surfaced as errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("array size {size} is out of range ({min}..={max})")]
    ArraySizeOutOfRange { size: usize, min: usize, max: usize },

    #[error("speed {ms}ms is out of range ({min}..={max})")]
    SpeedOutOfRange { ms: u64, min: u64, max: u64 },

    #[error("minimum value {min} is below {floor}")]
    MinValueTooSmall { min: u32, floor: u32 },

    #[error("minimum value {min} is greater than maximum value {max}")]
    EmptyValueRange { min: u32, max: u32 },

    #[error("value {value} is outside the configured range {min}..={max}")]
    ValueOutOfRange { value: u32, min: u32, max: u32 },

    #[error("{len} values given, at most {max} are supported")]
    TooManyValues { len: usize, max: usize },
}
