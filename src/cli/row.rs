//! Expense row CLI commands
//!
//! Implements CLI commands for listing, adding, removing and editing the
//! itemized expenses. Rows are addressed by their zero-based position as
//! shown by `row list`.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_row_details, format_row_table, format_totals};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{RowUpdate, Tag};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Row subcommands
#[derive(Subcommand)]
pub enum RowCommands {
    /// List all rows with totals
    #[command(alias = "ls")]
    List,

    /// Add a row; with no options a blank Need row is appended
    Add {
        /// Row label
        #[arg(short, long)]
        label: Option<String>,

        /// Amount (non-numeric characters are dropped)
        #[arg(short, long)]
        amount: Option<String>,

        /// Need, Want or Saving
        #[arg(short, long)]
        tag: Option<Tag>,
    },

    /// Remove the row at a position
    #[command(alias = "rm")]
    Remove {
        /// Row position
        index: usize,
    },

    /// Change fields of the row at a position
    Update {
        /// Row position
        index: usize,

        /// New label
        #[arg(short, long)]
        label: Option<String>,

        /// New amount (non-numeric characters are dropped)
        #[arg(short, long)]
        amount: Option<String>,

        /// New tag: Need, Want or Saving
        #[arg(short, long)]
        tag: Option<Tag>,
    },
}

/// Handle a row command
pub fn handle_row_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RowCommands,
) -> BudgetResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        RowCommands::List => {
            let ledger = service.ledger()?;
            println!("{}", format_row_table(&ledger));
            println!();
            print!("{}", format_totals(&ledger, &settings.currency_symbol));
        }

        RowCommands::Add { label, amount, tag } => {
            let (index, row) = service.add_row(label.as_deref(), amount.as_deref(), tag)?;
            println!("Added row {}", format_row_details(index, &row));
        }

        RowCommands::Remove { index } => match service.remove_row(index)? {
            Some(row) => println!("Removed row {}", format_row_details(index, &row)),
            None => println!("No row at position {}; nothing removed.", index),
        },

        RowCommands::Update {
            index,
            label,
            amount,
            tag,
        } => {
            let updates: Vec<RowUpdate> = label
                .map(RowUpdate::Label)
                .into_iter()
                .chain(amount.map(RowUpdate::Amount))
                .chain(tag.map(RowUpdate::Tag))
                .collect();

            if updates.is_empty() {
                return Err(BudgetError::Validation(
                    "Nothing to update. Use --label, --amount or --tag".into(),
                ));
            }

            let row = service
                .update_row(index, updates)?
                .ok_or_else(|| BudgetError::row_not_found(index))?;
            println!("Updated row {}", format_row_details(index, &row));
        }
    }

    Ok(())
}
