//! Ledger display formatting
//!
//! Formats the expense rows as a table, followed by the derived totals.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ExpenseRow, Ledger, OnboardingProfile};
use crate::services::{summarize_ledger, Allocation};

use super::report::{format_percentage, truncate};

const LABEL_WIDTH: usize = 32;

#[derive(Tabled)]
struct RowDisplay {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Tag")]
    tag: String,
}

impl RowDisplay {
    fn new(index: usize, row: &ExpenseRow) -> Self {
        let label = if row.label.is_empty() {
            "(unnamed)".to_string()
        } else {
            truncate(&row.label, LABEL_WIDTH)
        };
        let amount = if row.amount.is_empty() {
            "-".to_string()
        } else {
            row.amount.clone()
        };

        Self {
            index,
            label,
            amount,
            tag: row.tag.to_string(),
        }
    }
}

/// Format the rows as a table
pub fn format_row_table(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No expense rows.\n\nRun 'smartbudgetx row add' to add one.".to_string();
    }

    let rows = ledger
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| RowDisplay::new(i, row));

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the totals block shown under the table
pub fn format_totals(ledger: &Ledger, symbol: &str) -> String {
    let summary = summarize_ledger(ledger);
    let mut output = String::new();

    output.push_str(&format!("{:<10} {}\n", "Income:", summary.income.format_grouped(symbol)));
    output.push_str(&format!("{:<10} {}\n", "Needs:", summary.needs.format_grouped(symbol)));
    output.push_str(&format!("{:<10} {}\n", "Wants:", summary.wants.format_grouped(symbol)));
    output.push_str(&format!("{:<10} {}\n", "Savings:", summary.savings.format_grouped(symbol)));
    output.push_str(&format!("{:<10} {}\n", "Total:", summary.total.format_grouped(symbol)));
    output.push_str(&format!(
        "{:<10} {}",
        "Leftover:",
        summary.leftover.format_grouped(symbol)
    ));
    if summary.is_over_budget() {
        output.push_str("  (over budget)");
    }
    output.push('\n');

    output
}

/// Format one row after it was added or changed
pub fn format_row_details(index: usize, row: &ExpenseRow) -> String {
    let label = if row.label.is_empty() { "(unnamed)" } else { &row.label };
    let amount = if row.amount.is_empty() { "-" } else { &row.amount };
    format!("#{} {} | {} | {}", index, label, amount, row.tag)
}

/// Format the stored profile
pub fn format_profile(profile: &OnboardingProfile) -> String {
    profile
        .review_lines()
        .into_iter()
        .map(|(label, value)| format!("{:<18}{}\n", format!("{}:", label), value))
        .collect()
}

/// Format an allocation with percentages, one bucket per line
pub fn format_allocation(allocation: &Allocation, symbol: &str) -> String {
    if allocation.is_empty() {
        return "No leftover to allocate.\n".to_string();
    }

    allocation
        .iter()
        .map(|b| {
            format!(
                "  {:<20} {:>4}  {}\n",
                b.label,
                format_percentage(b.pct()),
                b.amount.format_with_symbol(symbol)
            )
        })
        .collect()
}
