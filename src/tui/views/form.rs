//! Budget form view
//!
//! Income field, the expense table and the running totals

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Money, Tag};
use crate::tui::app::{App, EditTarget};
use crate::tui::layout::FormLayout;

use super::main_border_color;

/// Render the budget form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = FormLayout::new(area);

    render_income(frame, app, layout.income);
    render_rows(frame, app, layout.rows);
    render_totals(frame, app, layout.totals);
}

fn render_income(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Income (i to edit) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(main_border_color(app)));

    if app.editing == Some(EditTarget::Income) {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(app.editor.clone(), inner);
        return;
    }

    let ledger = app.ledger();
    let text = if ledger.income.is_empty() {
        Span::styled("not set", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            ledger.parsed_income().format_grouped(app.symbol()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    };

    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}

fn tag_color(tag: Tag) -> Color {
    match tag {
        Tag::Need => Color::Blue,
        Tag::Want => Color::Magenta,
        Tag::Saving => Color::Green,
    }
}

fn render_rows(frame: &mut Frame, app: &mut App, area: Rect) {
    let ledger = app.ledger();

    let block = Block::default()
        .title(format!(" Expenses ({}) ", ledger.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(main_border_color(app)));

    if ledger.is_empty() {
        let text = Paragraph::new("No expenses. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(4),  // #
        Constraint::Min(20),    // Label
        Constraint::Length(14), // Amount
        Constraint::Length(8),  // Tag
    ];

    let header = Row::new(vec![
        Cell::from("#").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Label").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Tag").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let editing_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan);

    let rows: Vec<Row> = ledger
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let label = if app.editing == Some(EditTarget::Label(i)) {
                Cell::from(app.editor.value().to_string()).style(editing_style)
            } else if row.label.is_empty() {
                Cell::from("(unnamed)").style(Style::default().fg(Color::DarkGray))
            } else {
                Cell::from(row.label.clone())
            };

            let amount = if app.editing == Some(EditTarget::Amount(i)) {
                Cell::from(app.editor.value().to_string()).style(editing_style)
            } else {
                Cell::from(row.parsed_amount().format_with_symbol(app.symbol()))
            };

            Row::new(vec![
                Cell::from(i.to_string()),
                label,
                amount,
                Cell::from(row.tag.label()).style(Style::default().fg(tag_color(row.tag))),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_totals(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.summary();
    let symbol = app.symbol().to_string();

    let block = Block::default()
        .title(" Totals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let amount = |label: &'static str, value: Money, color: Color| {
        vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::White)),
            Span::styled(value.format_grouped(&symbol), Style::default().fg(color)),
            Span::raw("   "),
        ]
    };

    let mut first = amount("Needs", summary.needs, tag_color(Tag::Need));
    first.extend(amount("Wants", summary.wants, tag_color(Tag::Want)));
    first.extend(amount("Savings", summary.savings, tag_color(Tag::Saving)));

    let leftover_color = if summary.is_over_budget() {
        Color::Red
    } else {
        Color::Green
    };
    let mut second = amount("Total", summary.total, Color::Yellow);
    second.extend(amount("Leftover", summary.leftover, leftover_color));
    if summary.is_over_budget() {
        second.push(Span::styled(
            "over budget",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(vec![Line::from(first), Line::from(second)]).block(block);
    frame.render_widget(paragraph, area);
}
