//! "How it works" overlay
//!
//! A centered popup describing insertion sort: the four phases, pseudocode,
//! the bar colour legend, and complexity. Drawn over everything else while
//! open; `esc` or `?` closes it.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

const PSEUDOCODE: [&str; 9] = [
    "for i = 1 to length(array) - 1",
    "    key = array[i]",
    "    j = i - 1",
    "",
    "    while j >= 0 and array[j] > key",
    "        array[j+1] = array[j]",
    "        j = j - 1",
    "",
    "    array[j+1] = key",
];

const PHASES: [&str; 4] = [
    "Start with the second element (the first is already \"sorted\")",
    "Compare it with the elements before it and shift those elements right to make space",
    "Insert the element in its correct position in the sorted part",
    "Repeat for all elements in the array",
];

const COMPLEXITY: [(&str, &str); 4] = [
    ("Time Complexity (Best)", "O(n)"),
    ("Time Complexity (Average)", "O(n²)"),
    ("Time Complexity (Worst)", "O(n²)"),
    ("Space Complexity", "O(1)"),
];

/// A rectangle of `percent_x` by `percent_y` centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.title)
            .add_modifier(Modifier::BOLD),
    ))
}

fn legend_entry(color: Color, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("██ ", Style::default().fg(color)),
        Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Every line of the explanation, top to bottom
pub fn explanation_lines() -> Vec<Line<'static>> {
    let text = Style::default().fg(DEFAULT_THEME.fg);
    let mut lines = vec![
        heading("HOW IT WORKS"),
        Line::styled(
            "Insertion sort is a simple sorting algorithm that builds the final sorted array \
             one item at a time. It's much like sorting playing cards in your hand.",
            text,
        ),
        Line::default(),
    ];

    for (number, phase) in PHASES.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", number + 1),
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", phase), text),
        ]));
    }

    lines.push(Line::default());
    lines.push(heading("PSEUDOCODE"));
    lines.extend(
        PSEUDOCODE
            .iter()
            .map(|l| Line::styled(*l, Style::default().fg(DEFAULT_THEME.success))),
    );

    lines.push(Line::default());
    lines.push(heading("VISUALIZATION GUIDE"));
    lines.push(legend_entry(DEFAULT_THEME.bar_sorted, "Sorted elements"));
    lines.push(legend_entry(DEFAULT_THEME.bar_current, "Current element"));
    lines.push(legend_entry(
        DEFAULT_THEME.bar_compare,
        "Comparison element",
    ));
    lines.push(legend_entry(
        DEFAULT_THEME.bar_unsorted,
        "Unsorted elements",
    ));

    lines.push(Line::default());
    lines.push(heading("COMPLEXITY"));
    for (name, value) in COMPLEXITY {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", name), text.add_modifier(Modifier::BOLD)),
            Span::styled(value, Style::default().fg(DEFAULT_THEME.primary)),
        ]));
    }

    lines
}

/// Furthest the popup scrolls; the last line stays on screen
pub fn max_scroll() -> u16 {
    u16::try_from(explanation_lines().len().saturating_sub(1)).unwrap_or(u16::MAX)
}

/// Render the explanation popup over `area`
pub fn render_explanation(frame: &mut Frame, area: Rect, scroll: u16) {
    let popup = centered_rect(80, 85, area);
    let block = Block::default()
        .title(" INSERTION SORT ")
        .title_bottom(Line::from(" esc close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(2, 2, 1, 0));

    let paragraph = Paragraph::new(explanation_lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_explanation_has_all_sections() {
        let text: Vec<String> = explanation_lines().iter().map(plain).collect();
        for section in [
            "HOW IT WORKS",
            "PSEUDOCODE",
            "VISUALIZATION GUIDE",
            "COMPLEXITY",
        ] {
            assert!(text.iter().any(|l| l == section), "missing {}", section);
        }
        assert!(text.iter().any(|l| l == "Space Complexity: O(1)"));
        assert!(text.iter().any(|l| l.contains("array[j+1] = key")));
    }

    #[test]
    fn test_max_scroll_keeps_last_line() {
        assert_eq!(max_scroll() as usize, explanation_lines().len() - 1);
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(80, 50, area);
        assert_eq!(popup.width, 80);
        assert_eq!(popup.x, 10);
        assert!(popup.y + popup.height <= area.height);
    }
}
