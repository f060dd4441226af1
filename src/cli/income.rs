//! Income CLI commands
//!
//! Implements CLI commands for setting and showing the monthly income.

use clap::Subcommand;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income (non-numeric characters are dropped)
    Set {
        /// Income amount (e.g., "4500" or "4500.00")
        amount: String,
    },

    /// Show the monthly income
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let service = LedgerService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        IncomeCommands::Set { amount } => {
            let stored = service.set_income(&amount)?;
            let summary = service.summary()?;

            if stored.is_empty() {
                println!("Income cleared.");
            } else {
                println!("Set monthly income to {}", summary.income.format_grouped(symbol));
            }
            println!("Leftover: {}", summary.leftover.format_grouped(symbol));
        }

        IncomeCommands::Show => {
            let ledger = service.ledger()?;
            if ledger.income.is_empty() {
                println!("No income set.");
                println!("Use 'smartbudgetx income set <amount>' to set it.");
            } else {
                println!(
                    "Monthly income: {} (entered as \"{}\")",
                    ledger.parsed_income().format_grouped(symbol),
                    ledger.income
                );
            }
        }
    }

    Ok(())
}
