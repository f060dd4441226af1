//! CSV Export functionality
//!
//! One row per category comparing actual spending with the 50/30/20
//! reference, followed by one row per allocation bucket.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Session};
use crate::reports::MonthlyReport;
use crate::services::ChartData;

/// Export the report as CSV
pub fn export_report_csv<W: Write>(
    report: &MonthlyReport,
    session: &Session,
    writer: &mut W,
) -> BudgetResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    let chart = ChartData::from_ledger(&session.ledger);

    csv.write_record(["Section", "Name", "Amount", "Ideal", "Share"])
        .map_err(export_error)?;

    for (actual, ideal) in chart.actual.iter().zip(&chart.ideal) {
        csv.write_record([
            "Category",
            actual.name,
            decimal(actual.value).as_str(),
            decimal(ideal.value).as_str(),
            "",
        ])
        .map_err(export_error)?;
    }

    csv.write_record(["Summary", "Income", decimal(report.income).as_str(), "", ""])
        .map_err(export_error)?;
    csv.write_record(["Summary", "Leftover", decimal(report.summary.leftover).as_str(), "", ""])
        .map_err(export_error)?;

    for bucket in report.allocation.iter() {
        csv.write_record([
            "Allocation",
            bucket.label,
            decimal(bucket.amount).as_str(),
            "",
            format!("{:.2}", bucket.pct()).as_str(),
        ])
        .map_err(export_error)?;
    }

    csv.flush()?;
    Ok(())
}

fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}

fn export_error(e: ::csv::Error) -> BudgetError {
    BudgetError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRow, Tag};

    #[test]
    fn test_csv_rows() {
        let mut session = Session::default();
        session.ledger = crate::models::Ledger::empty();
        session.ledger.set_income("1000");
        session.ledger.push_row(ExpenseRow::new("Rent", "1200", Tag::Need));
        let report = MonthlyReport::from_session(&session);

        let mut buffer = Vec::new();
        export_report_csv(&report, &session, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Section,Name,Amount,Ideal,Share",
                "Category,Needs,1200.00,500.00,",
                "Category,Wants,0.00,300.00,",
                "Category,Savings,0.00,200.00,",
                "Summary,Income,1000.00,,",
                "Summary,Leftover,-200.00,,",
            ]
        );
    }

    #[test]
    fn test_csv_allocation_rows() {
        let mut session = Session::default();
        session.ledger.set_income("100");
        let report = MonthlyReport::from_session(&session);

        let mut buffer = Vec::new();
        export_report_csv(&report, &session, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Allocation,Broad-market ETFs,50.00,,0.50"));
        assert!(text.contains("Allocation,Emergency savings,20.00,,0.20"));
    }
}
