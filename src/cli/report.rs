//! Report CLI commands
//!
//! `summary`, `chart` and `insights`: the three read-only views of the
//! derived state.

use crate::config::Settings;
use crate::display::format_totals;
use crate::error::BudgetResult;
use crate::reports::{ComparisonReport, InsightsReport};
use crate::storage::Storage;

/// Handle `summary`
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let session = storage.session.get()?;
    println!("Budget Summary");
    println!("{}", "=".repeat(30));
    print!("{}", format_totals(&session.ledger, &settings.currency_symbol));
    Ok(())
}

/// Handle `chart`
pub fn handle_chart_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let report = ComparisonReport::generate(storage)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Handle `insights`
pub fn handle_insights_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let report = InsightsReport::generate(storage)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}
