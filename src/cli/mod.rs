//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod history;
pub mod income;
pub mod onboard;
pub mod report;
pub mod row;

pub use export::{handle_export_command, ExportArgs};
pub use history::handle_history_command;
pub use income::{handle_income_command, IncomeCommands};
pub use onboard::{handle_onboard_command, handle_profile_command, OnboardArgs};
pub use report::{handle_chart_command, handle_insights_command, handle_summary_command};
pub use row::{handle_row_command, RowCommands};
