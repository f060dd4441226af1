//! Core data models for SmartBudgetX
//!
//! This module contains the data structures of the budgeting domain: money,
//! expense rows, the ledger, the onboarding profile and the session that
//! carries them between runs.

pub mod expense;
pub mod ledger;
pub mod money;
pub mod profile;
pub mod session;

pub use expense::{sanitize_numeric, ExpenseRow, Tag};
pub use ledger::{template_rows, Ledger, RowUpdate};
pub use money::Money;
pub use profile::{InvestArea, OnboardingProfile, StockPreference, EMPTY_PLACEHOLDER};
pub use session::{Session, SESSION_SCHEMA_VERSION};
