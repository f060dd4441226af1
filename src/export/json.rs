//! JSON Export functionality
//!
//! Exports a structured snapshot of the report with schema versioning.
//! Amounts are integer cents, as in the session file.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseRow, OnboardingProfile, Session};
use crate::reports::MonthlyReport;
use crate::services::{Allocation, DerivedSummary, IdealDistribution, TIPS};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Structured report export
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Name printed on the report
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<OnboardingProfile>,

    /// Income text as entered
    pub income_text: String,

    pub rows: Vec<ExpenseRow>,

    pub summary: DerivedSummary,

    /// The 50/30/20 reference split of income
    pub ideal: IdealDistribution,

    /// Empty when nothing is left over
    pub allocation: Allocation,

    pub tips: Vec<String>,
}

impl ReportExport {
    /// Build the export from a session
    pub fn from_session(session: &Session) -> Self {
        let report = MonthlyReport::from_session(session);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            name: report.name,
            profile: session.profile.clone(),
            income_text: session.ledger.income.clone(),
            rows: session.ledger.rows.clone(),
            ideal: IdealDistribution::for_income(report.summary.income),
            summary: report.summary,
            allocation: report.allocation,
            tips: TIPS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Export the report snapshot as JSON
pub fn export_report_json<W: Write>(
    session: &Session,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = ReportExport::from_session(session);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RowUpdate, StockPreference, Tag};
    use serde_json::Value;

    #[test]
    fn test_json_export_contents() {
        let mut session = Session::default();
        session.ledger.set_income("2000");
        session.ledger.update_row(0, RowUpdate::Amount("1000".into()));
        session.profile = Some(OnboardingProfile {
            name: "Sam".into(),
            stock_pref: Some(StockPreference::Tech),
            ..Default::default()
        });

        let mut buffer = Vec::new();
        export_report_json(&session, &mut buffer, false).unwrap();
        let value: Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["name"], "Sam");
        assert_eq!(value["rows"].as_array().unwrap().len(), 6);
        assert_eq!(value["rows"][0]["tag"], Tag::Need.label());
        assert_eq!(value["summary"]["needs"], 100_000);
        assert_eq!(value["summary"]["leftover"], 100_000);
        assert_eq!(value["ideal"]["needs"], 100_000);
        assert_eq!(value["allocation"]["buckets"][0]["label"], "Tech ETFs");
        assert_eq!(value["allocation"]["buckets"][0]["amount"], 60_000);
        assert_eq!(value["tips"].as_array().unwrap().len(), 3);
    }
}
