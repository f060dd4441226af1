//! Derived-summary computation
//!
//! Pure functions that turn the ledger into per-tag totals, leftover, the
//! 50/30/20 reference distribution and the two chart series. Every surface
//! (form totals, chart, insights, report) calls into this module so the
//! numbers always agree.

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRow, Ledger, Money, Tag};

/// Totals derived from the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivedSummary {
    pub income: Money,
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
    pub total: Money,
    /// Income minus total; negative when over budget
    pub leftover: Money,
}

impl DerivedSummary {
    /// Total for one tag
    pub fn for_tag(&self, tag: Tag) -> Money {
        match tag {
            Tag::Need => self.needs,
            Tag::Want => self.wants,
            Tag::Saving => self.savings,
        }
    }

    /// Whether expenses exceed income
    pub fn is_over_budget(&self) -> bool {
        self.leftover.is_negative()
    }
}

/// Summarize income text and expense rows
///
/// Unparsable income or amounts count as zero. The result does not depend
/// on row order.
pub fn summarize(income: &str, rows: &[ExpenseRow]) -> DerivedSummary {
    let income = Money::parse_lenient(income);
    let total_for = |tag: Tag| -> Money {
        rows.iter()
            .filter(|row| row.tag == tag)
            .map(ExpenseRow::parsed_amount)
            .sum()
    };

    let needs = total_for(Tag::Need);
    let wants = total_for(Tag::Want);
    let savings = total_for(Tag::Saving);
    let total = needs + wants + savings;

    DerivedSummary {
        income,
        needs,
        wants,
        savings,
        total,
        leftover: income - total,
    }
}

/// Summarize a ledger
pub fn summarize_ledger(ledger: &Ledger) -> DerivedSummary {
    summarize(&ledger.income, &ledger.rows)
}

/// The 50/30/20 reference split of income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealDistribution {
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
}

impl IdealDistribution {
    /// Apply the fixed guideline shares to an income
    pub fn for_income(income: Money) -> Self {
        Self {
            needs: income.scale_bps(Tag::Need.guideline_bps()),
            wants: income.scale_bps(Tag::Want.guideline_bps()),
            savings: income.scale_bps(Tag::Saving.guideline_bps()),
        }
    }

    /// Ideal amount for one tag
    pub fn for_tag(&self, tag: Tag) -> Money {
        match tag {
            Tag::Need => self.needs,
            Tag::Want => self.wants,
            Tag::Saving => self.savings,
        }
    }
}

/// One named value in a chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: Money,
}

/// The two three-value series compared by the chart surfaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub actual: Vec<ChartPoint>,
    pub ideal: Vec<ChartPoint>,
}

impl ChartData {
    /// Build both series from a summary
    pub fn from_summary(summary: &DerivedSummary) -> Self {
        let ideal = IdealDistribution::for_income(summary.income);
        let series = |value_of: &dyn Fn(Tag) -> Money| {
            Tag::ALL
                .iter()
                .map(|tag| ChartPoint {
                    name: tag.plural(),
                    value: value_of(*tag),
                })
                .collect::<Vec<_>>()
        };

        Self {
            actual: series(&|tag| summary.for_tag(tag)),
            ideal: series(&|tag| ideal.for_tag(tag)),
        }
    }

    /// Build both series straight from a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self::from_summary(&summarize_ledger(ledger))
    }

    /// Largest value in either series, used to scale bars
    pub fn max_value(&self) -> Money {
        self.actual
            .iter()
            .chain(self.ideal.iter())
            .map(|p| p.value)
            .max()
            .unwrap_or_default()
    }
}
