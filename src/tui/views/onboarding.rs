//! Onboarding view
//!
//! One panel per wizard step with a progress line in the title

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{InvestArea, StockPreference};
use crate::setup::OnboardingStep;
use crate::tui::app::{App, EditTarget};

use super::main_border_color;

/// Render the onboarding wizard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let step = app.wizard.step();
    let block = Block::default()
        .title(format!(" {} · {} ", app.wizard.progress_label(), step.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(main_border_color(app)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let (lines, hint) = match step {
        OnboardingStep::Identity => (identity_lines(app), "n: name  g: goal  Enter: next"),
        OnboardingStep::InvestAreas => (
            option_lines(
                app.wizard_cursor,
                InvestArea::ALL
                    .iter()
                    .map(|a| (a.label(), app.wizard.draft().invest_areas.contains(a))),
            ),
            "Space: toggle  Enter: next  Esc: back",
        ),
        OnboardingStep::StockPref => (
            option_lines(
                app.wizard_cursor,
                StockPreference::ALL
                    .iter()
                    .map(|p| (p.label(), app.wizard.draft().stock_pref == Some(*p))),
            ),
            "Space: select  Enter: next  Esc: back",
        ),
        OnboardingStep::Review => (review_lines(app), "Enter: finish  Esc: back"),
    };

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );

    if matches!(app.editing, Some(EditTarget::Name) | Some(EditTarget::Goal)) {
        let editor_area = Rect::new(chunks[0].x, chunks[0].y + 4, chunks[0].width, 1);
        if editor_area.bottom() <= chunks[0].bottom() {
            frame.render_widget(app.editor.clone(), editor_area);
        }
    }
}

fn identity_lines(app: &App) -> Vec<Line<'static>> {
    let draft = app.wizard.draft();
    vec![
        field_line("Name", draft.display_name()),
        field_line("Goal", draft.display_goal()),
    ]
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", format!("{}:", label)), Style::default().fg(Color::Cyan)),
        Span::raw(value.to_string()),
    ])
}

fn option_lines<'a>(
    cursor: usize,
    options: impl Iterator<Item = (&'a str, bool)>,
) -> Vec<Line<'static>> {
    options
        .enumerate()
        .map(|(i, (label, checked))| {
            let marker = if checked { "[x]" } else { "[ ]" };
            let pointer = if i == cursor { "▶ " } else { "  " };
            let style = if i == cursor {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("{}{} {}", pointer, marker, label), style))
        })
        .collect()
}

fn review_lines(app: &App) -> Vec<Line<'static>> {
    app.wizard
        .draft()
        .review_lines()
        .into_iter()
        .map(|(label, value)| field_line(label, &value))
        .collect()
}
