//! Bar chart pane rendering
//!
//! Draws one bar per element of the displayed array, coloured by its role in
//! the current step, with a marker row above pointing at the key being
//! inserted and the element it is compared against.

use crate::playback::{PlaybackState, VisualState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Widest bar drawn, in columns
const MAX_BAR_WIDTH: u16 = 6;

/// How a bar is highlighted. Earlier variants win when several apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Compare,
    Current,
    Sorted,
    Unsorted,
}

impl BarRole {
    pub fn color(self) -> Color {
        match self {
            BarRole::Compare => DEFAULT_THEME.bar_compare,
            BarRole::Current => DEFAULT_THEME.bar_current,
            BarRole::Sorted => DEFAULT_THEME.bar_sorted,
            BarRole::Unsorted => DEFAULT_THEME.bar_unsorted,
        }
    }
}

/// Role of the bar at `index`
pub fn bar_role(index: usize, visual: &VisualState, sorted: &FxHashSet<usize>) -> BarRole {
    if visual.compare == Some(index) {
        BarRole::Compare
    } else if visual.current == Some(index) {
        BarRole::Current
    } else if sorted.contains(&index) {
        BarRole::Sorted
    } else {
        BarRole::Unsorted
    }
}

/// Bar width and gap that fit `count` bars into `available` columns
pub fn bar_geometry(available: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (0, 0);
    }

    let count = count as u16;
    let gap = if count <= 10 { 2 } else { 1 };
    let gaps = gap * count.saturating_sub(1);
    let width = (available.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH);
    (width, gap)
}

/// Render the bar chart pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    visual: &VisualState,
    max_value: u32,
    state: PlaybackState,
) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let values = &visual.display;
    if values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, inner);
        return;
    }

    let (width, gap) = bar_geometry(inner.width, values.len());
    let chart_width = width * values.len() as u16 + gap * (values.len() as u16 - 1);

    // Center the chart horizontally
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(chart_width.min(inner.width)),
            Constraint::Fill(1),
        ])
        .split(inner);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(columns[1]);

    frame.render_widget(Paragraph::new(marker_line(visual, width, gap)), rows[0]);

    let sorted: FxHashSet<usize> = visual.sorted.iter().copied().collect();
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_role(index, visual, &sorted).color();
            Bar::default()
                .value(u64::from(value))
                .text_value(String::new())
                .label(Line::from(value.to_string()))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(gap)
        .max(u64::from(max_value))
        .label_style(Style::default().fg(DEFAULT_THEME.fg));
    frame.render_widget(chart, rows[1]);

    if state == PlaybackState::Complete {
        render_complete_banner(frame, inner);
    }
}

/// Arrow markers above the current and compare bars
fn marker_line(visual: &VisualState, width: u16, gap: u16) -> Line<'static> {
    let stride = (width + gap) as usize;
    let offset = (width / 2) as usize;
    let mut spans = Vec::new();
    let mut cursor = 0;

    let mut markers: Vec<(usize, Color)> = Vec::new();
    if let Some(i) = visual.current {
        markers.push((i, DEFAULT_THEME.bar_current));
    }
    if let Some(i) = visual.compare {
        markers.push((i, DEFAULT_THEME.bar_compare));
    }
    markers.sort_by_key(|(i, _)| *i);
    markers.dedup_by_key(|(i, _)| *i);

    for (index, color) in markers {
        let column = index * stride + offset;
        if column < cursor {
            continue;
        }
        spans.push(Span::raw(" ".repeat(column - cursor)));
        spans.push(Span::styled(
            "▼",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        cursor = column + 1;
    }

    Line::from(spans)
}

fn render_complete_banner(frame: &mut Frame, area: Rect) {
    let text = " SORTING COMPLETE! ";
    let width = (text.len() as u16 + 2).min(area.width);
    let height = 3.min(area.height);
    let banner = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.success)),
        );

    frame.render_widget(Clear, banner);
    frame.render_widget(paragraph, banner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visual(current: Option<usize>, compare: Option<usize>, sorted: Vec<usize>) -> VisualState {
        VisualState {
            display: vec![10; 5],
            sorted,
            current,
            compare,
            operation: None,
        }
    }

    #[test]
    fn test_compare_beats_current_beats_sorted() {
        let v = visual(Some(2), Some(1), vec![0, 1, 2]);
        let sorted: FxHashSet<usize> = v.sorted.iter().copied().collect();

        assert_eq!(bar_role(0, &v, &sorted), BarRole::Sorted);
        assert_eq!(bar_role(1, &v, &sorted), BarRole::Compare);
        assert_eq!(bar_role(2, &v, &sorted), BarRole::Current);
        assert_eq!(bar_role(3, &v, &sorted), BarRole::Unsorted);
    }

    #[test]
    fn test_geometry_fits_available_width() {
        assert_eq!(bar_geometry(80, 0), (0, 0));
        assert_eq!(bar_geometry(80, 5), (6, 2));
        let (width, gap) = bar_geometry(80, 30);
        assert_eq!(gap, 1);
        assert!(width * 30 + gap * 29 <= 80);
        // Never collapses to nothing even when the terminal is tiny
        assert_eq!(bar_geometry(10, 30), (1, 1));
    }

    #[test]
    fn test_marker_line_positions() {
        let v = visual(Some(2), Some(0), Vec::new());
        let line = marker_line(&v, 3, 1);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        // bar 0 center at column 1, bar 2 center at column 9
        assert_eq!(text, " ▼       ▼");
    }

    #[test]
    fn test_marker_line_empty_without_markers() {
        let v = visual(None, None, vec![0]);
        assert!(marker_line(&v, 3, 1).spans.is_empty());
    }
}
