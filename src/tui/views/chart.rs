//! Chart view
//!
//! Actual spending per tag next to the 50/30/20 ideal for the same income

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{BarChart, Block, Borders},
    Frame,
};

use crate::services::{ChartData, ChartPoint};
use crate::tui::app::App;

use super::main_border_color;

/// Render the chart view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chart = ChartData::from_summary(&app.summary());

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let border = main_border_color(app);
    render_series(frame, halves[0], " Actual ", &chart.actual, Color::Yellow, border);
    render_series(frame, halves[1], " Ideal 50/30/20 ", &chart.ideal, Color::Cyan, border);
}

/// Bar heights in whole currency units; negatives clamp to zero
fn bar_values(points: &[ChartPoint]) -> Vec<(&'static str, u64)> {
    points
        .iter()
        .map(|p| (p.name, u64::try_from(p.value.dollars()).unwrap_or(0)))
        .collect()
}

fn render_series(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    points: &[ChartPoint],
    color: Color,
    border: Color,
) {
    let data = bar_values(points);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let chart = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(color))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_bar_values_clamp_negative() {
        let points = vec![
            ChartPoint { name: "Needs", value: Money::from_cents(150_075) },
            ChartPoint { name: "Wants", value: Money::from_dollars(-5) },
        ];
        assert_eq!(bar_values(&points), vec![("Needs", 1500), ("Wants", 0)]);
    }
}
