//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: Bar chart of the displayed array with role colouring and markers
//! - [`banner`]: Operation description and progress gauge
//! - [`controls`]: Speed and array-size sliders, button hints
//! - [`explanation`]: "How it works" popup
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! state and keeps nothing between frames.

pub mod banner;
pub mod bars;
pub mod controls;
pub mod explanation;
pub mod status;

// Re-export render functions for convenience
pub use banner::{render_description, render_progress};
pub use bars::render_bars_pane;
pub use controls::{render_controls_pane, ControlsRenderData, FocusedControl};
pub use explanation::render_explanation;
pub use status::{render_status_bar, StatusRenderData};
