//! Command-line arguments and validated configuration
//!
//! [`Args`] is the raw `clap` surface; [`Config::from_args`] checks it against
//! the bounds in [`constants`] and produces the [`Config`] a
//! [`Session`](crate::session::Session) is built from.

pub mod constants;
pub mod errors;

use clap::Parser;
use constants::*;
use errors::ConfigError;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "sortty")]
#[command(about = "Watch insertion sort run step by step in your terminal")]
#[command(version)]
pub struct Args {
    /// Number of elements in the array (5-30)
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Milliseconds between animation steps (10-500, higher is slower)
    #[arg(short, long, default_value_t = DEFAULT_SPEED_MS)]
    pub speed: u64,

    /// Smallest value a generated element can take
    #[arg(long, default_value_t = MIN_VALUE)]
    pub min_value: u32,

    /// Largest value a generated element can take
    #[arg(long, default_value_t = MAX_VALUE)]
    pub max_value: u32,

    /// Seed for reproducible arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Explicit first array, comma separated (e.g. 5,3,8,1)
    #[arg(long, value_delimiter = ',')]
    pub values: Option<Vec<u32>>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated visualizer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    array_size: usize,
    speed_ms: u64,
    value_range: RangeInclusive<u32>,
    seed: Option<u64>,
    initial_values: Option<Vec<u32>>,
    log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            array_size: DEFAULT_ARRAY_SIZE,
            speed_ms: DEFAULT_SPEED_MS,
            value_range: MIN_VALUE..=MAX_VALUE,
            seed: None,
            initial_values: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Check `args` against the supported ranges
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&args.size) {
            return Err(ConfigError::ArraySizeOutOfRange {
                size: args.size,
                min: MIN_ARRAY_SIZE,
                max: MAX_ARRAY_SIZE,
            });
        }

        if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&args.speed) {
            return Err(ConfigError::SpeedOutOfRange {
                ms: args.speed,
                min: MIN_SPEED_MS,
                max: MAX_SPEED_MS,
            });
        }

        if args.min_value < MIN_VALUE_FLOOR {
            return Err(ConfigError::MinValueTooSmall {
                min: args.min_value,
                floor: MIN_VALUE_FLOOR,
            });
        }
        if args.min_value > args.max_value {
            return Err(ConfigError::EmptyValueRange {
                min: args.min_value,
                max: args.max_value,
            });
        }
        let value_range = args.min_value..=args.max_value;

        if let Some(values) = &args.values {
            if values.len() > MAX_ARRAY_SIZE {
                return Err(ConfigError::TooManyValues {
                    len: values.len(),
                    max: MAX_ARRAY_SIZE,
                });
            }
            if let Some(&value) = values.iter().find(|&&v| !value_range.contains(&v)) {
                return Err(ConfigError::ValueOutOfRange {
                    value,
                    min: args.min_value,
                    max: args.max_value,
                });
            }
        }

        Ok(Config {
            array_size: args.size,
            speed_ms: args.speed,
            value_range,
            seed: args.seed,
            initial_values: args.values,
            log_file: args.log_file,
        })
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub fn value_range(&self) -> RangeInclusive<u32> {
        self.value_range.clone()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Array to show first instead of a random one
    pub fn initial_values(&self) -> Option<&[u32]> {
        self.initial_values.as_deref()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}
