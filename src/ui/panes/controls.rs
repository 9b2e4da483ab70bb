//! Speed and array-size sliders plus button hints
//!
//! The sliders follow the same locking rules as playback: speed is fixed
//! while steps are being applied, and the array size is fixed for as long as
//! there are steps in flight (running or paused).

use crate::config::constants::{MAX_ARRAY_SIZE, MAX_SPEED_MS, MIN_ARRAY_SIZE, MIN_SPEED_MS};
use crate::playback::PlaybackState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Which slider the arrow keys adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedControl {
    Speed,
    ArraySize,
}

impl FocusedControl {
    pub fn next(self) -> Self {
        match self {
            FocusedControl::Speed => FocusedControl::ArraySize,
            FocusedControl::ArraySize => FocusedControl::Speed,
        }
    }
}

/// Speed can be changed unless playback is actively running
pub fn speed_enabled(state: PlaybackState) -> bool {
    state != PlaybackState::Running
}

/// Array size can be changed only when no steps are in flight
pub fn size_enabled(state: PlaybackState) -> bool {
    !state.is_sorting()
}

/// Speed as shown to the user: 100% is fastest
pub fn speed_percent(speed_ms: u64) -> u64 {
    (100.0 - speed_ms as f64 / 5.0).round().max(0.0) as u64
}

pub struct ControlsRenderData {
    pub state: PlaybackState,
    pub speed_ms: u64,
    pub array_size: usize,
    pub pending_size: Option<usize>,
    pub focused: FocusedControl,
}

/// Render the controls pane
pub fn render_controls_pane(frame: &mut Frame, area: Rect, data: &ControlsRenderData) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let speed_ratio =
        MAX_SPEED_MS.saturating_sub(data.speed_ms) as f64 / (MAX_SPEED_MS - MIN_SPEED_MS) as f64;
    render_slider(
        frame,
        rows[0],
        "SPEED",
        format!("{}%", speed_percent(data.speed_ms)),
        speed_ratio,
        data.focused == FocusedControl::Speed,
        speed_enabled(data.state),
    );

    let shown_size = data.pending_size.unwrap_or(data.array_size);
    let size_ratio =
        shown_size.saturating_sub(MIN_ARRAY_SIZE) as f64 / (MAX_ARRAY_SIZE - MIN_ARRAY_SIZE) as f64;
    render_slider(
        frame,
        rows[1],
        "ARRAY SIZE",
        shown_size.to_string(),
        size_ratio,
        data.focused == FocusedControl::ArraySize,
        size_enabled(data.state),
    );

    frame.render_widget(Paragraph::new(button_hints(data.state)), rows[2]);
}

fn render_slider(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    value: String,
    ratio: f64,
    is_focused: bool,
    is_enabled: bool,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(area);

    let name_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    let marker = if is_focused { "▸ " } else { "  " };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(marker, name_style),
            Span::styled(name.to_string(), name_style),
        ])),
        columns[0],
    );

    let (fill, label) = if is_enabled {
        (DEFAULT_THEME.primary, value)
    } else {
        (DEFAULT_THEME.comment, format!("{} (locked)", value))
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(fill).bg(DEFAULT_THEME.current_line_bg))
        .label(Span::styled(label, Style::default().fg(Color::Black)))
        .ratio(ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, columns[1]);
}

fn button_hints(state: PlaybackState) -> Line<'static> {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default().fg(DEFAULT_THEME.fg);

    let play = if state == PlaybackState::Running {
        " PAUSE "
    } else {
        " START "
    };

    Line::from(vec![
        Span::styled(" ⎵ ", key_style),
        Span::styled(play, desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" RESET ", desc_style),
        Span::styled(" n ", key_style),
        Span::styled(" NEW ARRAY ", desc_style),
        Span::styled(" ? ", key_style),
        Span::styled(" HOW IT WORKS ", desc_style),
    ])
}
