//! Help overlay
//!
//! Lists the key bindings; any key closes it

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("1-4", "Switch view"),
            ("Tab", "Toggle sidebar focus"),
            ("?", "Show this help"),
            ("q", "Quit"),
        ],
    ),
    (
        "Budget",
        &[
            ("j/k", "Select row"),
            ("i", "Edit income"),
            ("e/Enter", "Edit label"),
            ("m", "Edit amount"),
            ("t", "Cycle Need/Want/Saving"),
            ("a", "Add row"),
            ("d", "Delete row"),
        ],
    ),
    (
        "Onboarding",
        &[
            ("n/g", "Edit name/goal"),
            ("j/k Space", "Choose options"),
            ("Enter", "Next step / finish"),
            ("Esc", "Previous step"),
        ],
    ),
    ("Insights", &[("x", "Export report")]),
];

/// Render the help overlay
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    for (section, keys) in BINDINGS {
        lines.push(Line::from(Span::styled(
            *section,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, action) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
