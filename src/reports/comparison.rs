//! Actual vs ideal comparison
//!
//! Text rendering of the chart surface: one pair of bars per category,
//! scaled against the largest value in either series.

use crate::display::report::format_bar;
use crate::error::BudgetResult;
use crate::models::Ledger;
use crate::services::ChartData;
use crate::storage::Storage;

const BAR_WIDTH: usize = 30;

/// Actual spending per category next to the 50/30/20 reference
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub chart: ChartData,
}

impl ComparisonReport {
    pub fn new(ledger: &Ledger) -> Self {
        Self {
            chart: ChartData::from_ledger(ledger),
        }
    }

    /// Compute the comparison for the stored session
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        Ok(Self::new(&storage.session.get()?.ledger))
    }

    /// Format the report for terminal output
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let max = self.chart.max_value().as_f64();

        output.push_str("Actual vs Ideal (50/30/20)\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for (actual, ideal) in self.chart.actual.iter().zip(&self.chart.ideal) {
            output.push_str(&format!(
                "{:<8} Actual {} {}\n",
                actual.name,
                format_bar(actual.value.as_f64(), max, BAR_WIDTH),
                actual.value.format_grouped(symbol)
            ));
            output.push_str(&format!(
                "{:<8} Ideal  {} {}\n",
                "",
                format_bar(ideal.value.as_f64(), max, BAR_WIDTH),
                ideal.value.format_grouped(symbol)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRow, Tag};

    #[test]
    fn test_comparison_lines() {
        let mut ledger = Ledger::empty();
        ledger.set_income("4000");
        ledger.push_row(ExpenseRow::new("Rent", "2000", Tag::Need));

        let output = ComparisonReport::new(&ledger).format_terminal("$");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[2].starts_with("Needs    Actual"));
        assert!(lines[2].ends_with("$2,000"));
        assert!(lines[3].ends_with("$2,000"));
        assert!(lines[4].starts_with("Wants"));
        assert!(lines[5].ends_with("$1,200"));
        assert!(lines[7].ends_with("$800"));
    }

    #[test]
    fn test_full_bar_for_largest_value() {
        let mut ledger = Ledger::empty();
        ledger.set_income("1000");
        ledger.push_row(ExpenseRow::new("Rent", "500", Tag::Need));

        let output = ComparisonReport::new(&ledger).format_terminal("$");
        assert!(output.contains(&"█".repeat(BAR_WIDTH)));
    }
}
