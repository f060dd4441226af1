//! Monthly report layout
//!
//! The exported report is a fixed list of positioned lines on an A4 page.
//! Every renderer in `export` consumes the same `ReportLine` list, so the
//! PDF and the plain-text file always carry identical content.

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::{Money, Session};
use crate::services::{advise, summarize_ledger, Allocation, DerivedSummary};
use crate::storage::Storage;

/// Report title
pub const REPORT_TITLE: &str = "SmartBudgetX — Monthly Report";

/// Name printed when no profile name is available
pub const DEFAULT_REPORT_NAME: &str = "SmartBudgetX User";

/// A4 page size in millimetres
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MARGIN_X: f32 = 14.0;
const BUCKET_X: f32 = 18.0;
const TITLE_Y: f32 = 20.0;
const BODY_Y: f32 = 32.0;
const ALLOCATION_Y: f32 = 86.0;
const BUCKET_Y: f32 = 94.0;
const LINE_STEP: f32 = 8.0;

const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;

/// Typeface weight of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Bold,
}

/// One line of text placed on the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    /// Distance from the left edge, in mm
    pub x_mm: f32,
    /// Baseline distance from the top edge, in mm
    pub y_mm: f32,
    pub size_pt: f32,
    pub weight: FontWeight,
    pub text: String,
}

impl ReportLine {
    fn body(x_mm: f32, y_mm: f32, text: String) -> Self {
        Self {
            x_mm,
            y_mm,
            size_pt: BODY_SIZE,
            weight: FontWeight::Regular,
            text,
        }
    }
}

/// Inputs of the monthly report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    pub name: String,
    pub income: Money,
    pub summary: DerivedSummary,
    pub allocation: Allocation,
}

impl MonthlyReport {
    /// Build the report from its parts
    ///
    /// A missing or blank name falls back to `DEFAULT_REPORT_NAME`.
    pub fn new(summary: DerivedSummary, allocation: Allocation, name: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_REPORT_NAME)
            .to_string();

        Self {
            name,
            income: summary.income,
            summary,
            allocation,
        }
    }

    /// Compute the report for a session
    pub fn from_session(session: &Session) -> Self {
        let summary = summarize_ledger(&session.ledger);
        let preference = session.profile.as_ref().and_then(|p| p.stock_pref);
        let allocation = advise(summary.leftover, preference);
        Self::new(summary, allocation, session.report_name())
    }

    /// Compute the report for the stored session
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        Ok(Self::from_session(&storage.session.get()?))
    }

    /// The positioned lines, top to bottom
    pub fn lines(&self, symbol: &str) -> Vec<ReportLine> {
        let mut lines = vec![ReportLine {
            x_mm: MARGIN_X,
            y_mm: TITLE_Y,
            size_pt: TITLE_SIZE,
            weight: FontWeight::Bold,
            text: REPORT_TITLE.to_string(),
        }];

        let body = [
            format!("Name: {}", self.name),
            format!("Income: {}", self.income.format_grouped(symbol)),
            format!("Needs: {}", self.summary.needs.format_grouped(symbol)),
            format!("Wants: {}", self.summary.wants.format_grouped(symbol)),
            format!("Savings: {}", self.summary.savings.format_grouped(symbol)),
            format!("Leftover: {}", self.summary.leftover.format_grouped(symbol)),
        ];
        lines.extend(
            body.into_iter()
                .enumerate()
                .map(|(i, text)| ReportLine::body(MARGIN_X, BODY_Y + LINE_STEP * i as f32, text)),
        );

        if !self.allocation.is_empty() {
            lines.push(ReportLine::body(
                MARGIN_X,
                ALLOCATION_Y,
                "Suggested Allocation:".to_string(),
            ));
            lines.extend(self.allocation.iter().enumerate().map(|(i, bucket)| {
                ReportLine::body(
                    BUCKET_X,
                    BUCKET_Y + LINE_STEP * i as f32,
                    format!("- {}: {}", bucket.label, bucket.amount.format_with_symbol(symbol)),
                )
            }));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRow, Ledger, OnboardingProfile, StockPreference, Tag};

    fn session(income: &str, rows: Vec<ExpenseRow>, profile: Option<OnboardingProfile>) -> Session {
        let mut ledger = Ledger::empty();
        ledger.set_income(income);
        for row in rows {
            ledger.push_row(row);
        }
        Session {
            ledger,
            profile,
            ..Default::default()
        }
    }

    fn texts(lines: &[ReportLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_report_with_allocation() {
        let profile = OnboardingProfile {
            name: "Alex".into(),
            stock_pref: Some(StockPreference::Tech),
            ..Default::default()
        };
        let report = MonthlyReport::from_session(&session(
            "4500",
            vec![
                ExpenseRow::new("Rent", "1500", Tag::Need),
                ExpenseRow::new("Fun", "2000", Tag::Want),
            ],
            Some(profile),
        ));

        let lines = report.lines("$");
        assert_eq!(
            texts(&lines),
            vec![
                "SmartBudgetX — Monthly Report",
                "Name: Alex",
                "Income: $4,500",
                "Needs: $1,500",
                "Wants: $2,000",
                "Savings: $0",
                "Leftover: $1,000",
                "Suggested Allocation:",
                "- Tech ETFs: $600.00",
                "- Blue-chip stocks: $300.00",
                "- Emergency savings: $100.00",
            ]
        );

        assert_eq!((lines[0].x_mm, lines[0].y_mm), (14.0, 20.0));
        assert_eq!(lines[0].weight, FontWeight::Bold);
        assert_eq!(lines[6].y_mm, 72.0);
        assert_eq!((lines[7].x_mm, lines[7].y_mm), (14.0, 86.0));
        assert_eq!((lines[10].x_mm, lines[10].y_mm), (18.0, 110.0));
    }

    #[test]
    fn test_report_without_allocation_when_over_budget() {
        let report = MonthlyReport::from_session(&session(
            "1000",
            vec![
                ExpenseRow::new("Rent", "700", Tag::Need),
                ExpenseRow::new("Fun", "500", Tag::Want),
            ],
            None,
        ));

        let lines = report.lines("$");
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1].text, "Name: SmartBudgetX User");
        assert_eq!(lines[6].text, "Leftover: -$200");
    }

    #[test]
    fn test_blank_profile_name_falls_back() {
        let report = MonthlyReport::from_session(&session(
            "",
            vec![],
            Some(OnboardingProfile {
                name: "   ".into(),
                ..Default::default()
            }),
        ));
        assert_eq!(report.name, DEFAULT_REPORT_NAME);
        assert!(report.allocation.is_empty());
    }
}
