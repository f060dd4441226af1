//! Budget ledger model
//!
//! Holds the monthly income text and the ordered list of expense rows.
//! All mutators sanitize numeric text on the way in; derived totals are never
//! stored here.

use serde::{Deserialize, Serialize};

use super::expense::{sanitize_numeric, ExpenseRow, Tag};
use super::money::Money;

/// A single field edit applied by `Ledger::update_row`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowUpdate {
    /// Replace the label verbatim
    Label(String),
    /// Replace the amount; non-numeric characters are stripped
    Amount(String),
    /// Reclassify the row
    Tag(Tag),
}

/// Monthly income plus itemized expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Income as entered (digits and `.` only)
    #[serde(default)]
    pub income: String,

    /// Expense rows in display order
    #[serde(default)]
    pub rows: Vec<ExpenseRow>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_template_rows()
    }
}

impl Ledger {
    /// A ledger with no income and no rows
    pub fn empty() -> Self {
        Self {
            income: String::new(),
            rows: Vec::new(),
        }
    }

    /// A fresh ledger pre-populated with the six template rows
    pub fn with_template_rows() -> Self {
        Self {
            income: String::new(),
            rows: template_rows(),
        }
    }

    /// Replace the income text, keeping only digits and `.`
    pub fn set_income(&mut self, text: &str) {
        self.income = sanitize_numeric(text);
    }

    /// Parsed income, zero when empty or unparsable
    pub fn parsed_income(&self) -> Money {
        Money::parse_lenient(&self.income)
    }

    /// Append a blank Need row and return its index
    pub fn add_row(&mut self) -> usize {
        self.rows.push(ExpenseRow::blank());
        self.rows.len() - 1
    }

    /// Append a fully specified row and return its index
    pub fn push_row(&mut self, row: ExpenseRow) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Remove the row at `index`
    ///
    /// A stale index is a silent no-op and returns `None`.
    pub fn remove_row(&mut self, index: usize) -> Option<ExpenseRow> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Apply one field edit to the row at `index`
    ///
    /// Returns false, leaving the ledger untouched, when the index is stale.
    pub fn update_row(&mut self, index: usize, update: RowUpdate) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };

        match update {
            RowUpdate::Label(label) => row.label = label,
            RowUpdate::Amount(amount) => row.amount = sanitize_numeric(&amount),
            RowUpdate::Tag(tag) => row.tag = tag,
        }
        true
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&ExpenseRow> {
        self.rows.get(index)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the ledger has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The six zero-amount rows a new ledger starts with
pub fn template_rows() -> Vec<ExpenseRow> {
    vec![
        ExpenseRow::new("Rent / Mortgage", "", Tag::Need),
        ExpenseRow::new("Groceries / Essentials", "", Tag::Need),
        ExpenseRow::new("Utilities", "", Tag::Need),
        ExpenseRow::new("Transportation", "", Tag::Need),
        ExpenseRow::new("Entertainment", "", Tag::Want),
        ExpenseRow::new("Subscriptions", "", Tag::Want),
    ]
}
