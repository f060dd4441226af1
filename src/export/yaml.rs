//! YAML Export functionality
//!
//! The same snapshot as the JSON export, for reading by humans.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::ReportExport;
use crate::models::Session;

/// Export the report snapshot as YAML
pub fn export_report_yaml<W: Write>(session: &Session, writer: &mut W) -> BudgetResult<()> {
    let export = ReportExport::from_session(session);

    writeln!(writer, "# SmartBudgetX Monthly Report")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer, "# Amounts are in cents.")?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export() {
        let mut session = Session::default();
        session.ledger.set_income("100");

        let mut buffer = Vec::new();
        export_report_yaml(&session, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# SmartBudgetX Monthly Report"));
        assert!(text.contains("name: SmartBudgetX User"));

        let body: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(body["summary"]["income"].as_i64(), Some(10_000));
    }
}
