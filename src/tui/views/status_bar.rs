//! Status bar view
//!
//! Shows leftover funds, the latest status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.summary();
    let symbol = app.symbol().to_string();

    let mut spans = vec![];

    let leftover_color = if summary.leftover.is_negative() {
        Color::Red
    } else if summary.leftover.is_zero() {
        Color::Yellow
    } else {
        Color::Green
    };

    spans.push(Span::styled(" Leftover: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        summary.leftover.format_grouped(&symbol),
        Style::default().fg(leftover_color).add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        app.active_view.title(),
        Style::default().fg(Color::Cyan),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = key_hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let paragraph = Paragraph::new(Line::from(spans));

    frame.render_widget(paragraph, area);
}

fn key_hints(app: &App) -> &'static str {
    if app.input_mode == InputMode::Editing {
        return " Enter:Save  Esc:Cancel ";
    }
    match app.active_view {
        ActiveView::Form => " a:Add  d:Del  t:Tag  ?:Help  q:Quit ",
        ActiveView::Insights => " x:Export  ?:Help  q:Quit ",
        ActiveView::Onboarding => " Enter:Next  Esc:Back  q:Quit ",
        ActiveView::Chart => " ?:Help  q:Quit ",
    }
}
