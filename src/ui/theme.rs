use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub title: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar_unsorted: Color,
    pub bar_sorted: Color,
    pub bar_current: Color,
    pub bar_compare: Color,
    pub progress: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    title: Color::Rgb(249, 226, 175),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
    bar_unsorted: Color::Rgb(78, 168, 222), // Blue
    bar_sorted: Color::Rgb(87, 204, 153),   // Green
    bar_current: Color::Rgb(255, 77, 109),  // Pink
    bar_compare: Color::Rgb(255, 200, 87),  // Yellow
    progress: Color::Rgb(245, 194, 231),    // Pink
};
