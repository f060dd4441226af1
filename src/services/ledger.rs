//! Ledger service
//!
//! Provides the income and expense-row operations used by the CLI. Each
//! mutation is applied to the stored session, written back to disk and
//! recorded in the audit log.

use tracing::{debug, info};

use crate::audit::EntityType;
use crate::error::BudgetResult;
use crate::models::{ExpenseRow, Ledger, RowUpdate, Session, Tag};
use crate::services::summary::{summarize_ledger, DerivedSummary};
use crate::storage::Storage;

/// Service for ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current ledger
    pub fn ledger(&self) -> BudgetResult<Ledger> {
        Ok(self.storage.session.get()?.ledger)
    }

    /// Summary of the current ledger
    pub fn summary(&self) -> BudgetResult<DerivedSummary> {
        Ok(summarize_ledger(&self.ledger()?))
    }

    /// Start over with a fresh session holding the template rows
    ///
    /// The stored profile is kept unless `keep_profile` is false.
    pub fn reset(&self, keep_profile: bool) -> BudgetResult<Session> {
        let before = self.storage.session.get()?;

        let mut fresh = Session::default();
        if keep_profile {
            fresh.profile = before.profile.clone();
        }
        self.storage.session.replace(fresh.clone())?;
        self.storage.save()?;

        self.storage
            .log_create(EntityType::Session, "session", None, &fresh.ledger)?;

        info!(rows = fresh.ledger.len(), "Session reset to template rows");
        Ok(fresh)
    }

    /// Replace the income text; non-numeric characters are stripped
    pub fn set_income(&self, text: &str) -> BudgetResult<String> {
        let (before, after) = self.storage.session.update(|s| {
            let before = s.ledger.income.clone();
            s.ledger.set_income(text);
            (before, s.ledger.income.clone())
        })?;
        self.storage.save()?;

        self.storage
            .log_update(EntityType::Income, "income", None, &before, &after)?;

        info!(income = %after, "Income updated");
        Ok(after)
    }

    /// Append a row and return its index
    ///
    /// With no arguments this is the form's "add item": a blank Need row.
    pub fn add_row(
        &self,
        label: Option<&str>,
        amount: Option<&str>,
        tag: Option<Tag>,
    ) -> BudgetResult<(usize, ExpenseRow)> {
        let row = match (label, amount, tag) {
            (None, None, None) => ExpenseRow::blank(),
            _ => ExpenseRow::new(
                label.unwrap_or_default(),
                amount.unwrap_or_default(),
                tag.unwrap_or_default(),
            ),
        };

        let index = self.storage.session.update(|s| s.ledger.push_row(row.clone()))?;
        self.storage.save()?;

        self.storage.log_create(
            EntityType::ExpenseRow,
            index.to_string(),
            Some(row.label.clone()),
            &row,
        )?;

        info!(index, label = %row.label, tag = %row.tag, "Added expense row");
        Ok((index, row))
    }

    /// Remove the row at `index`
    ///
    /// A stale index changes nothing and returns `None`.
    pub fn remove_row(&self, index: usize) -> BudgetResult<Option<ExpenseRow>> {
        let removed = self.storage.session.update(|s| s.ledger.remove_row(index))?;

        let Some(row) = removed else {
            debug!(index, "Remove ignored: no row at index");
            return Ok(None);
        };

        self.storage.save()?;
        self.storage.log_delete(
            EntityType::ExpenseRow,
            index.to_string(),
            Some(row.label.clone()),
            &row,
        )?;

        info!(index, label = %row.label, "Removed expense row");
        Ok(Some(row))
    }

    /// Apply field edits to the row at `index`
    ///
    /// Returns the updated row, or `None` without touching anything when
    /// the index is stale.
    pub fn update_row(
        &self,
        index: usize,
        updates: Vec<RowUpdate>,
    ) -> BudgetResult<Option<ExpenseRow>> {
        let changed = self.storage.session.update(|s| {
            let before = s.ledger.row(index).cloned()?;
            for update in updates {
                s.ledger.update_row(index, update);
            }
            let after = s.ledger.row(index).cloned()?;
            Some((before, after))
        })?;

        let Some((before, after)) = changed else {
            debug!(index, "Update ignored: no row at index");
            return Ok(None);
        };

        self.storage.save()?;
        self.storage.log_update(
            EntityType::ExpenseRow,
            index.to_string(),
            Some(after.label.clone()),
            &before,
            &after,
        )?;

        info!(index, "Updated expense row");
        Ok(Some(after))
    }
}
