//! Export module for SmartBudgetX
//!
//! Writes the monthly report in one of several formats:
//! - PDF: the single-page report document (default)
//! - Text: the same lines as plain text
//! - JSON / YAML: a structured snapshot of ledger, summary and allocation
//! - CSV: category and allocation rows for spreadsheets

pub mod csv;
pub mod json;
pub mod pdf;
pub mod text;
pub mod yaml;

pub use self::csv::export_report_csv;
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use pdf::render_pdf;
pub use text::render_text;
pub use yaml::export_report_yaml;

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::models::Session;
use crate::reports::MonthlyReport;
use crate::storage::{write_atomic, Storage};

/// Output format of `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Text,
    Json,
    Yaml,
    Csv,
}

impl ReportFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
            ReportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
            ReportFormat::Csv => "csv",
        })
    }
}

/// Render the report for `session` in `format`
pub fn render_report<W: Write>(
    session: &Session,
    format: ReportFormat,
    symbol: &str,
    writer: &mut W,
) -> BudgetResult<()> {
    let report = MonthlyReport::from_session(session);

    match format {
        ReportFormat::Pdf => render_pdf(&report.lines(symbol), writer),
        ReportFormat::Text => render_text(&report.lines(symbol), writer),
        ReportFormat::Json => export_report_json(session, writer, true),
        ReportFormat::Yaml => export_report_yaml(session, writer),
        ReportFormat::Csv => export_report_csv(&report, session, writer),
    }
}

/// Where `export` writes when no output path is given
///
/// The configured file name goes in the exports directory, with its
/// extension swapped for non-PDF formats.
pub fn default_output_path(storage: &Storage, settings: &Settings, format: ReportFormat) -> PathBuf {
    let file_name = Path::new(&settings.report_file_name);
    let file_name = match format {
        ReportFormat::Pdf => file_name.to_path_buf(),
        other => file_name.with_extension(other.extension()),
    };
    storage.paths().export_dir().join(file_name)
}

/// Write the report for the stored session and record it in the audit log
pub fn export_report(
    storage: &Storage,
    settings: &Settings,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> BudgetResult<PathBuf> {
    let path = output.unwrap_or_else(|| default_output_path(storage, settings, format));
    let session = storage.session.get()?;

    write_atomic(&path, |writer| {
        render_report(&session, format, &settings.currency_symbol, writer)
    })?;

    storage.log_export(path.display().to_string(), format.to_string())?;
    info!(path = %path.display(), %format, "Report exported");

    Ok(path)
}
