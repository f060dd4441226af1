//! Reports module for SmartBudgetX
//!
//! The presentation surfaces that sit on top of the derived summary: the
//! insights panel, the actual vs ideal comparison and the monthly report
//! layout consumed by the exporters.

pub mod comparison;
pub mod insights;
pub mod monthly;

pub use comparison::ComparisonReport;
pub use insights::{InsightsReport, OVER_BUDGET_MESSAGE};
pub use monthly::{FontWeight, MonthlyReport, ReportLine, DEFAULT_REPORT_NAME, REPORT_TITLE};
