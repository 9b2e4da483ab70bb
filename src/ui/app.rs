//! Main TUI application state and logic

use crate::config::constants::SPEED_STEP_MS;
use crate::playback::PlaybackState;
use crate::session::Session;
use crate::ui::panes::{self, ControlsRenderData, FocusedControl, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

use super::theme::DEFAULT_THEME;

/// Longest the event loop waits for input before checking the playback timer
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Minimum time between two accepted space presses
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// The main application state
pub struct App {
    /// Source Array, playback, and random generator
    pub session: Session,

    /// Slider adjusted by the arrow keys
    pub focused: FocusedControl,

    /// Whether the explanation popup is open
    pub show_explanation: bool,

    /// Scroll offset inside the explanation popup
    pub explanation_scroll: u16,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            focused: FocusedControl::Speed,
            show_explanation: false,
            explanation_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Size changes land one loop turn after the slider moved
            if self.session.apply_pending_size() {
                self.status_message =
                    format!("New array of {} elements", self.session.array_size());
            }

            self.tick(Instant::now());

            // Wake up in time for the next step, or for input, whichever comes first
            let timeout = self
                .session
                .controller()
                .next_tick_in(Instant::now())
                .map_or(INPUT_POLL, |remaining| remaining.min(INPUT_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Fire the playback timer if due
    pub fn tick(&mut self, now: Instant) {
        if self.session.poll(now).is_some() {
            self.status_message = match self.session.state() {
                PlaybackState::Complete => "Sorting complete".to_string(),
                _ => "Playing...".to_string(),
            };
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let controller = self.session.controller();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(3), // description
                Constraint::Min(6),    // bars
                Constraint::Length(3), // progress
                Constraint::Length(5), // controls
                Constraint::Length(1), // status bar
            ])
            .split(size);

        let title = Paragraph::new("INSERTION SORT")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(DEFAULT_THEME.title)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(title, chunks[0]);

        panes::render_description(frame, chunks[1], &controller.description());

        panes::render_bars_pane(
            frame,
            chunks[2],
            controller.visual(),
            *self.session.value_range().end(),
            controller.state(),
        );

        panes::render_progress(
            frame,
            chunks[3],
            controller.step_index(),
            controller.total_steps(),
            controller.progress(),
        );

        panes::render_controls_pane(
            frame,
            chunks[4],
            &ControlsRenderData {
                state: controller.state(),
                speed_ms: self.session.speed_ms(),
                array_size: self.session.array_size(),
                pending_size: self.session.pending_size(),
                focused: self.focused,
            },
        );

        panes::render_status_bar(
            frame,
            chunks[5],
            &StatusRenderData {
                message: &self.status_message,
                current_step: controller.step_index(),
                total_steps: controller.total_steps(),
                state: controller.state(),
            },
        );

        if self.show_explanation {
            panes::render_explanation(frame, size, self.explanation_scroll);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.show_explanation {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') => {
                    self.show_explanation = false;
                }
                KeyCode::Up => {
                    self.explanation_scroll = self.explanation_scroll.saturating_sub(1);
                }
                KeyCode::Down => {
                    self.explanation_scroll = self
                        .explanation_scroll
                        .saturating_add(1)
                        .min(panes::explanation::max_scroll());
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    self.should_quit = true;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle play/pause (with 200ms debounce to prevent key repeat spam)
                if now.duration_since(self.last_space_press) >= SPACE_DEBOUNCE {
                    self.last_space_press = now;
                    self.toggle_playback(now);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.reset();
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.session.generate();
                self.status_message = "New array".to_string();
            }
            KeyCode::Char('?') | KeyCode::Char('h') => {
                self.show_explanation = true;
                self.explanation_scroll = 0;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused = self.focused.next();
            }
            KeyCode::Left => self.adjust_focused(-1),
            KeyCode::Right => self.adjust_focused(1),
            _ => {}
        }
    }

    fn toggle_playback(&mut self, now: Instant) {
        match self.session.state() {
            PlaybackState::Running => {
                self.session.pause();
                self.status_message = "Paused".to_string();
            }
            PlaybackState::Complete => {
                self.status_message = "Already sorted - press r to replay".to_string();
            }
            PlaybackState::Idle | PlaybackState::Paused => {
                if self.session.start(now) {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Array size is changing, try again".to_string();
                }
            }
        }
    }

    /// Move the focused slider one notch
    fn adjust_focused(&mut self, direction: i64) {
        let state = self.session.state();
        match self.focused {
            FocusedControl::Speed => {
                if !panes::controls::speed_enabled(state) {
                    self.status_message = "Pause to change speed".to_string();
                    return;
                }
                let step = SPEED_STEP_MS as i64 * direction;
                let target = (self.session.speed_ms() as i64 + step).max(0) as u64;
                let ms = self.session.set_speed_ms(target);
                debug!(ms, "speed changed");
                self.status_message = format!("Speed {}ms", ms);
            }
            FocusedControl::ArraySize => {
                if !panes::controls::size_enabled(state) {
                    self.status_message = "Reset to change array size".to_string();
                    return;
                }
                let current = self
                    .session
                    .pending_size()
                    .unwrap_or(self.session.array_size());
                let target = (current as i64 + direction).max(0) as usize;
                if self.session.request_array_size(target) {
                    self.status_message = "Generating new array...".to_string();
                }
            }
        }
    }
}
