//! Expense rows and their Need/Want/Saving classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::BudgetError;

/// Fixed three-way classification of an expense row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Tag {
    #[default]
    Need,
    Want,
    Saving,
}

impl Tag {
    /// All tags in display order
    pub const ALL: [Tag; 3] = [Tag::Need, Tag::Want, Tag::Saving];

    /// Singular label used in the ledger ("Need")
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Need => "Need",
            Tag::Want => "Want",
            Tag::Saving => "Saving",
        }
    }

    /// Plural label used by the summary surfaces ("Needs")
    pub fn plural(&self) -> &'static str {
        match self {
            Tag::Need => "Needs",
            Tag::Want => "Wants",
            Tag::Saving => "Savings",
        }
    }

    /// Share of income the 50/30/20 guideline assigns to this tag, in basis points
    pub fn guideline_bps(&self) -> u32 {
        match self {
            Tag::Need => 5_000,
            Tag::Want => 3_000,
            Tag::Saving => 2_000,
        }
    }

    /// The next tag in display order, wrapping around
    pub fn cycle(&self) -> Self {
        match self {
            Tag::Need => Tag::Want,
            Tag::Want => Tag::Saving,
            Tag::Saving => Tag::Need,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tag {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "need" | "needs" => Ok(Tag::Need),
            "want" | "wants" => Ok(Tag::Want),
            "saving" | "savings" => Ok(Tag::Saving),
            other => Err(BudgetError::Validation(format!(
                "Unknown tag '{}'. Use Need, Want or Saving",
                other
            ))),
        }
    }
}

/// Keep only ASCII digits and `.` from user-entered numeric text
///
/// Multiple decimal points and leading zeros are preserved.
pub fn sanitize_numeric(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// One itemized expense in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
    /// Free-form label, stored verbatim
    #[serde(default)]
    pub label: String,

    /// Amount as entered; parsed leniently when summarized
    #[serde(default)]
    pub amount: String,

    /// Classification
    #[serde(default)]
    pub tag: Tag,
}

impl ExpenseRow {
    /// Create a row; the amount text is sanitized
    pub fn new(label: impl Into<String>, amount: &str, tag: Tag) -> Self {
        Self {
            label: label.into(),
            amount: sanitize_numeric(amount),
            tag,
        }
    }

    /// The blank row appended by "add item"
    pub fn blank() -> Self {
        Self {
            label: String::new(),
            amount: String::new(),
            tag: Tag::Need,
        }
    }

    /// Parsed amount, zero when empty or unparsable
    pub fn parsed_amount(&self) -> Money {
        Money::parse_lenient(&self.amount)
    }
}
