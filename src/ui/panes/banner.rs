//! Operation description and progress gauge

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the one-line description of the step on screen
pub fn render_description(frame: &mut Frame, area: Rect, description: &str) {
    let paragraph = Paragraph::new(description)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.title)),
        );
    frame.render_widget(paragraph, area);
}

/// Render the step progress gauge
pub fn render_progress(frame: &mut Frame, area: Rect, step: usize, total: usize, ratio: f64) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .gauge_style(
            Style::default()
                .fg(DEFAULT_THEME.progress)
                .bg(DEFAULT_THEME.current_line_bg),
        )
        .label(format!("{}/{}", step, total))
        .style(Style::default().fg(Color::Black))
        .ratio(ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}
