//! CLI command for report export

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::export::{export_report, ReportFormat};
use crate::storage::Storage;

/// Export options
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to the configured report name in the
    /// exports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (defaults to the configured format, normally pdf)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

/// Handle `export`
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> BudgetResult<()> {
    let format = args.format.unwrap_or(settings.default_export_format);
    let path = export_report(storage, settings, format, args.output)?;
    println!("Report written to {}", path.display());
    Ok(())
}
