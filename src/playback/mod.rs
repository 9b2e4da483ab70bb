//! Timer-driven playback of insertion sort steps
//!
//! [`Controller`] owns the Source Array, the generated step list, the step
//! cursor, and the visual state the UI draws from. Nothing else writes to
//! them; the UI only calls [`Controller::start`], [`Controller::pause`],
//! [`Controller::reset`], and [`Controller::poll`].
//!
//! # States
//!
//! ```text
//!          start               tick (last step)
//!   Idle ────────► Running ───────────────────► Complete
//!                   │   ▲
//!             pause │   │ start
//!                   ▼   │
//!                  Paused
//! ```
//!
//! `reset` returns any state to `Idle`. While `Running`, exactly one tick is
//! pending in the [`timer::TickSlot`]; every other state has none.

pub mod timer;

use crate::steps::{generate_steps, Step, StepKind};
use std::time::{Duration, Instant};
use timer::TickSlot;
use tracing::{debug, info, trace};

/// Lifecycle of a playback session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
    Paused,
    Complete,
}

impl PlaybackState {
    /// Steps exist and playback has not finished
    pub fn is_sorting(self) -> bool {
        matches!(self, PlaybackState::Running | PlaybackState::Paused)
    }
}

/// What the bar chart should show right now
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisualState {
    /// Array values to draw
    pub display: Vec<u32>,
    /// Positions known to be sorted, in ascending order
    pub sorted: Vec<usize>,
    /// Position of the key being inserted
    pub current: Option<usize>,
    /// Position the key is being compared against
    pub compare: Option<usize>,
    /// Kind of the most recently applied step
    pub operation: Option<StepKind>,
}

impl VisualState {
    fn idle(source: &[u32]) -> Self {
        VisualState {
            display: source.to_vec(),
            ..VisualState::default()
        }
    }

    /// Apply one step's markers, then take its snapshot as the displayed array
    fn apply(&mut self, step: &Step) {
        match step.kind {
            StepKind::Current => {
                self.current = step.indices.first().copied();
                self.compare = None;
            }
            StepKind::Compare => {
                self.compare = step.indices.first().copied();
            }
            StepKind::Shift | StepKind::Insert => {}
            StepKind::Sorted => {
                self.sorted.clone_from(&step.indices);
            }
            StepKind::Complete => {
                self.sorted.clone_from(&step.indices);
                self.current = None;
                self.compare = None;
            }
        }

        self.operation = Some(step.kind);
        self.display.clone_from(&step.snapshot);
    }
}

/// Plays a generated step list back at a fixed interval
#[derive(Debug)]
pub struct Controller {
    source: Vec<u32>,
    steps: Vec<Step>,
    step_index: usize,
    state: PlaybackState,
    interval: Duration,
    visual: VisualState,
    tick: TickSlot,
}

impl Controller {
    /// Create an idle controller for `source`
    pub fn new(source: Vec<u32>, interval: Duration) -> Self {
        Controller {
            visual: VisualState::idle(&source),
            source,
            steps: Vec::new(),
            step_index: 0,
            state: PlaybackState::Idle,
            interval,
            tick: TickSlot::new(),
        }
    }

    /// Replace the Source Array, discarding any in-flight playback
    pub fn load(&mut self, source: Vec<u32>) {
        self.source = source;
        self.clear();
        debug!(len = self.source.len(), "loaded new source array");
    }

    /// Begin playback from `Idle`, or resume it from `Paused`.
    ///
    /// Returns `false` (and changes nothing) in any other state.
    pub fn start(&mut self, now: Instant) -> bool {
        match self.state {
            PlaybackState::Idle => {
                self.steps = generate_steps(&self.source);
                self.step_index = 0;
                self.visual = VisualState::idle(&self.source);
                self.state = PlaybackState::Running;
                self.tick.schedule(now, self.interval);
                debug!(total = self.steps.len(), "playback started");
                true
            }
            PlaybackState::Paused => {
                self.state = PlaybackState::Running;
                self.tick.schedule(now, self.interval);
                debug!(step = self.step_index, "playback resumed");
                true
            }
            PlaybackState::Running | PlaybackState::Complete => false,
        }
    }

    /// Suspend a running playback, keeping the cursor where it is
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }

        self.tick.cancel();
        self.state = PlaybackState::Paused;
        debug!(step = self.step_index, "playback paused");
        true
    }

    /// Return to `Idle` with the untouched Source Array on display
    pub fn reset(&mut self) {
        self.clear();
        debug!("playback reset");
    }

    fn clear(&mut self) {
        self.tick.cancel();
        self.steps.clear();
        self.step_index = 0;
        self.state = PlaybackState::Idle;
        self.visual = VisualState::idle(&self.source);
    }

    /// Fire the pending tick if it is due at `now`.
    ///
    /// Returns the kind of the step that was applied.
    pub fn poll(&mut self, now: Instant) -> Option<StepKind> {
        self.tick.take_due(now)?;
        self.advance(now)
    }

    /// Tick handler: apply the step under the cursor and move on
    fn advance(&mut self, now: Instant) -> Option<StepKind> {
        if self.state != PlaybackState::Running {
            return None;
        }

        let step = self.steps.get(self.step_index)?;
        let kind = step.kind;
        self.visual.apply(step);
        self.step_index += 1;
        trace!(step = self.step_index, kind = %kind, "applied step");

        if self.step_index == self.steps.len() {
            self.state = PlaybackState::Complete;
            let mut sorted = self.source.clone();
            sorted.sort_unstable();
            self.visual.display = sorted;
            info!(total = self.steps.len(), "sorting complete");
        } else {
            self.tick.schedule(now, self.interval);
        }

        Some(kind)
    }

    /// Change the tick interval. A pending tick keeps its deadline; the new
    /// interval applies from the next scheduled tick.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Number of steps applied so far
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Length of the generated step list (0 before the first start)
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn source(&self) -> &[u32] {
        &self.source
    }

    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    /// Whether a tick is scheduled
    pub fn has_pending_tick(&self) -> bool {
        self.tick.is_pending()
    }

    /// Time until the next tick, if one is scheduled
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.tick.remaining(now)
    }

    /// Fraction of steps applied, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.step_index as f64 / self.steps.len() as f64
        }
    }

    /// Human-readable label for the operation on screen
    pub fn description(&self) -> String {
        match self.state {
            PlaybackState::Idle => return "Ready to sort".to_string(),
            PlaybackState::Complete => return "Sorting Complete!".to_string(),
            PlaybackState::Running | PlaybackState::Paused => {}
        }

        let visual = &self.visual;
        match visual.operation {
            Some(StepKind::Current) => format!(
                "Selecting element at position {}",
                fmt_index(visual.current)
            ),
            Some(StepKind::Compare) => format!(
                "Comparing elements at positions {} and {}",
                fmt_index(visual.compare),
                fmt_index(visual.current)
            ),
            Some(StepKind::Shift) => "Moving elements".to_string(),
            Some(StepKind::Insert) => "Inserting element at its correct position".to_string(),
            Some(StepKind::Sorted) => {
                let positions: Vec<String> = visual.sorted.iter().map(|i| i.to_string()).collect();
                format!("Elements at positions {} are sorted", positions.join(", "))
            }
            Some(StepKind::Complete) => "Sorting Complete!".to_string(),
            None => "Processing...".to_string(),
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if self.tick.cancel() {
            trace!("cancelled pending tick on teardown");
        }
    }
}

fn fmt_index(index: Option<usize>) -> String {
    index.map_or_else(|| "-".to_string(), |i| i.to_string())
}
