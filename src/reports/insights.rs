//! Insights report
//!
//! The textual insights panel: the derived totals, the leftover headline,
//! the suggested allocation and the fixed tips.

use crate::error::BudgetResult;
use crate::models::{Ledger, OnboardingProfile, Session};
use crate::services::{advise, summarize_ledger, Allocation, DerivedSummary, TIPS};
use crate::storage::Storage;

/// Shown instead of an allocation when nothing is left over
pub const OVER_BUDGET_MESSAGE: &str =
    "You're over budget. Consider trimming some wants or renegotiating fixed costs.";

/// Insights for one ledger and profile
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsReport {
    pub summary: DerivedSummary,
    pub allocation: Allocation,
    pub tips: [&'static str; 3],
}

impl InsightsReport {
    /// Compute insights; the profile only contributes its stock preference
    pub fn new(ledger: &Ledger, profile: Option<&OnboardingProfile>) -> Self {
        let summary = summarize_ledger(ledger);
        let allocation = advise(summary.leftover, profile.and_then(|p| p.stock_pref));
        Self {
            summary,
            allocation,
            tips: TIPS,
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self::new(&session.ledger, session.profile.as_ref())
    }

    /// Compute insights for the stored session
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        Ok(Self::from_session(&storage.session.get()?))
    }

    /// The leftover sentence; zero leftover counts as over budget
    pub fn headline(&self, symbol: &str) -> String {
        if self.summary.leftover.is_positive() {
            format!(
                "You have {} left this month. Suggested allocation:",
                self.summary.leftover.format_grouped(symbol)
            )
        } else {
            OVER_BUDGET_MESSAGE.to_string()
        }
    }

    /// Label/value pairs of the totals column
    pub fn total_rows(&self, symbol: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Total Income", self.summary.income.format_grouped(symbol)),
            ("Total Needs", self.summary.needs.format_grouped(symbol)),
            ("Total Wants", self.summary.wants.format_grouped(symbol)),
            ("Total Savings", self.summary.savings.format_grouped(symbol)),
            ("Leftover", self.summary.leftover.format_grouped(symbol)),
        ]
    }

    /// One "label: amount" line per bucket
    pub fn allocation_lines(&self, symbol: &str) -> Vec<String> {
        self.allocation
            .iter()
            .map(|b| format!("{}: {}", b.label, b.amount.format_with_symbol(symbol)))
            .collect()
    }

    /// Format the report for terminal output
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Insights & Recommendations\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        for (label, value) in self.total_rows(symbol) {
            output.push_str(&format!("{:<20} {:>29}\n", label, value));
        }

        output.push('\n');
        output.push_str(&self.headline(symbol));
        output.push('\n');
        for line in self.allocation_lines(symbol) {
            output.push_str(&format!("  • {}\n", line));
        }

        output.push_str("\nQuick Lessons\n");
        output.push_str(&"-".repeat(50));
        output.push('\n');
        for tip in self.tips {
            output.push_str(&format!("  • {}\n", tip));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRow, StockPreference, Tag};

    fn ledger(income: &str, rows: &[(&str, Tag)]) -> Ledger {
        let mut ledger = Ledger::empty();
        ledger.set_income(income);
        for (amount, tag) in rows {
            ledger.push_row(ExpenseRow::new("item", amount, *tag));
        }
        ledger
    }

    #[test]
    fn test_headline_with_leftover() {
        let profile = OnboardingProfile {
            stock_pref: Some(StockPreference::Tech),
            ..Default::default()
        };
        let report = InsightsReport::new(&ledger("5500", &[("4500", Tag::Need)]), Some(&profile));

        assert_eq!(
            report.headline("$"),
            "You have $1,000 left this month. Suggested allocation:"
        );
        assert_eq!(
            report.allocation_lines("$"),
            vec![
                "Tech ETFs: $600.00",
                "Blue-chip stocks: $300.00",
                "Emergency savings: $100.00",
            ]
        );
    }

    #[test]
    fn test_zero_leftover_is_over_budget() {
        let report = InsightsReport::new(&ledger("100", &[("100", Tag::Want)]), None);
        assert_eq!(report.headline("$"), OVER_BUDGET_MESSAGE);
        assert!(report.allocation.is_empty());
    }

    #[test]
    fn test_terminal_output_always_lists_tips() {
        let report = InsightsReport::new(&ledger("1000", &[("1200", Tag::Need)]), None);
        let output = report.format_terminal("$");

        assert!(output.contains("-$200"));
        assert!(output.contains(OVER_BUDGET_MESSAGE));
        for tip in TIPS {
            assert!(output.contains(tip));
        }
    }
}
