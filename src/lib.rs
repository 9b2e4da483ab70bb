//! # Introduction
//!
//! SorTTY turns insertion sort into a list of discrete, replayable steps and
//! plays them back as an animated bar chart in the terminal, built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source Array → Step Generator → Steps → Playback Controller → Visual State → TUI
//! ```
//!
//! 1. [`steps`] — runs insertion sort once over a copy of the input and
//!    records every `current`, `compare`, `shift`, `insert`, `sorted`, and
//!    `complete` step together with the array snapshot after it.
//! 2. [`playback`] — a timer-driven state machine (`Idle`, `Running`,
//!    `Paused`, `Complete`) that applies one step per tick to the visual state.
//! 3. [`session`] — owns the Source Array and the random generator; handles
//!    "new array" and array-size changes.
//! 4. [`config`] — command-line arguments and their validation.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod playback;
pub mod session;
pub mod steps;
pub mod ui;
