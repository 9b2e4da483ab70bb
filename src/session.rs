//! A sorting session: Source Array lifecycle plus playback
//!
//! The UI talks to [`Session`] rather than to the controller directly. The
//! session owns the random source and the configured value range, generates
//! a fresh Source Array on request or when the array size changes, and
//! refuses to start playback while a size change is still pending.

use crate::config::constants::{MAX_ARRAY_SIZE, MAX_SPEED_MS, MIN_ARRAY_SIZE, MIN_SPEED_MS};
use crate::config::Config;
use crate::playback::{Controller, PlaybackState};
use crate::steps::StepKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::debug;

/// Fill a new array of `size` values drawn uniformly from `range`
pub fn random_array<R: Rng>(rng: &mut R, size: usize, range: RangeInclusive<u32>) -> Vec<u32> {
    (0..size).map(|_| rng.random_range(range.clone())).collect()
}

/// Source Array, its playback controller, and the generator for new arrays
pub struct Session<R = StdRng> {
    controller: Controller,
    rng: R,
    value_range: RangeInclusive<u32>,
    array_size: usize,
    pending_size: Option<usize>,
}

impl Session<StdRng> {
    /// Build a session from validated configuration, seeding the generator
    /// from `config.seed()` when present
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Session::with_rng(config, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: &Config, mut rng: R) -> Self {
        let value_range = config.value_range();
        let source = match config.initial_values() {
            Some(values) => values.to_vec(),
            None => random_array(&mut rng, config.array_size(), value_range.clone()),
        };

        Session {
            array_size: source.len(),
            controller: Controller::new(source, config.interval()),
            rng,
            value_range,
            pending_size: None,
        }
    }

    /// Replace the Source Array with a new random one of the current size
    pub fn generate(&mut self) {
        let source = random_array(&mut self.rng, self.array_size, self.value_range.clone());
        self.controller.load(source);
    }

    /// Ask for a different array size. The change is applied by
    /// [`Session::apply_pending_size`]; until then `start` is refused.
    ///
    /// Sizes outside the slider bounds are clamped.
    pub fn request_array_size(&mut self, size: usize) -> bool {
        let size = size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
        if size == self.array_size && self.pending_size.is_none() {
            return false;
        }

        debug!(size, "array size change requested");
        self.pending_size = Some(size);
        true
    }

    /// Apply a requested size change by generating a new array of that size
    pub fn apply_pending_size(&mut self) -> bool {
        let Some(size) = self.pending_size.take() else {
            return false;
        };

        self.array_size = size;
        self.generate();
        true
    }

    /// Start or resume playback. Refused while a size change is pending.
    pub fn start(&mut self, now: Instant) -> bool {
        if let Some(size) = self.pending_size {
            debug!(size, "start rejected: array size change pending");
            return false;
        }
        self.controller.start(now)
    }

    pub fn pause(&mut self) -> bool {
        self.controller.pause()
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Drive the playback timer; see [`Controller::poll`]
    pub fn poll(&mut self, now: Instant) -> Option<StepKind> {
        self.controller.poll(now)
    }

    /// Set the tick interval in milliseconds, clamped to the slider bounds.
    /// Returns the interval actually used.
    pub fn set_speed_ms(&mut self, ms: u64) -> u64 {
        let ms = ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS);
        self.controller.set_interval(Duration::from_millis(ms));
        ms
    }

    pub fn speed_ms(&self) -> u64 {
        self.controller.interval().as_millis() as u64
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    pub fn pending_size(&self) -> Option<usize> {
        self.pending_size
    }

    pub fn value_range(&self) -> RangeInclusive<u32> {
        self.value_range.clone()
    }

    pub fn state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Args;
    use clap::Parser;

    fn config(args: &[&str]) -> Config {
        let argv = std::iter::once("sortty").chain(args.iter().copied());
        Config::from_args(Args::parse_from(argv)).unwrap()
    }

    #[test]
    fn test_random_array_respects_size_and_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = random_array(&mut rng, 30, 10..=100);
        assert_eq!(values.len(), 30);
        assert!(values.iter().all(|v| (10..=100).contains(v)));
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let a = Session::new(&config(&["--seed", "42"]));
        let b = Session::new(&config(&["--seed", "42"]));
        assert_eq!(a.controller().source(), b.controller().source());
        assert_eq!(a.array_size(), 15);
    }

    #[test]
    fn test_initial_values_override_random_array() {
        let session = Session::new(&config(&["--values", "5,3,8,1", "--min-value", "1"]));
        assert_eq!(session.controller().source(), &[5, 3, 8, 1]);
        assert_eq!(session.array_size(), 4);
    }

    #[test]
    fn test_generate_discards_playback() {
        let t0 = Instant::now();
        let mut session = Session::new(&config(&["--seed", "3"]));
        assert!(session.start(t0));
        session.poll(t0 + Duration::from_millis(100));

        session.generate();
        assert_eq!(session.state(), PlaybackState::Idle);
        assert_eq!(session.controller().total_steps(), 0);
        assert_eq!(session.controller().source().len(), 15);
    }

    #[test]
    fn test_start_rejected_while_size_change_pending() {
        let t0 = Instant::now();
        let mut session = Session::new(&config(&["--seed", "9"]));

        assert!(session.request_array_size(8));
        assert_eq!(session.pending_size(), Some(8));
        assert!(!session.start(t0));
        assert_eq!(session.state(), PlaybackState::Idle);

        assert!(session.apply_pending_size());
        assert_eq!(session.pending_size(), None);
        assert_eq!(session.array_size(), 8);
        assert_eq!(session.controller().source().len(), 8);
        assert!(session.start(t0));
    }

    #[test]
    fn test_size_change_forces_idle() {
        let t0 = Instant::now();
        let mut session = Session::new(&config(&["--seed", "9"]));
        session.start(t0);
        session.request_array_size(20);
        session.apply_pending_size();
        assert_eq!(session.state(), PlaybackState::Idle);
        assert!(!session.controller().has_pending_tick());
    }

    #[test]
    fn test_size_requests_are_clamped() {
        let mut session = Session::new(&config(&["--seed", "1"]));
        session.request_array_size(100);
        assert_eq!(session.pending_size(), Some(30));
        session.request_array_size(0);
        assert_eq!(session.pending_size(), Some(5));

        // Asking for the current size with nothing pending changes nothing
        session.apply_pending_size();
        assert!(!session.request_array_size(5));
        assert!(!session.apply_pending_size());
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut session = Session::new(&Config::default());
        assert_eq!(session.set_speed_ms(5), 10);
        assert_eq!(session.set_speed_ms(900), 500);
        assert_eq!(session.set_speed_ms(250), 250);
        assert_eq!(session.speed_ms(), 250);
    }
}
