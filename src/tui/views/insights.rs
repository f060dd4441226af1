//! Insights view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::reports::InsightsReport;
use crate::tui::app::App;

use super::main_border_color;

/// Render the insights view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let report = InsightsReport::new(&app.ledger(), app.profile().as_ref());
    let symbol = app.symbol().to_string();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(6)])
        .split(area);

    let mut lines: Vec<Line> = report
        .total_rows(&symbol)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<16}", label), Style::default().fg(Color::White)),
                Span::styled(value, Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    let headline_style = if report.allocation.is_empty() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    lines.push(Line::from(Span::styled(
        report.headline(&symbol),
        headline_style.add_modifier(Modifier::BOLD),
    )));
    for line in report.allocation_lines(&symbol) {
        lines.push(Line::from(format!("  • {}", line)));
    }

    let block = Block::default()
        .title(" Insights & Recommendations (x to export) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(main_border_color(app)));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let tips: Vec<Line> = report
        .tips
        .iter()
        .map(|tip| Line::from(format!("• {}", tip)))
        .collect();
    let block = Block::default()
        .title(" Quick Lessons ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(tips).block(block).wrap(Wrap { trim: true }),
        chunks[1],
    );
}
