//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger, profile and reports for
//! the terminal.

pub mod ledger;
pub mod report;

pub use ledger::{format_allocation, format_profile, format_row_details, format_row_table, format_totals};
