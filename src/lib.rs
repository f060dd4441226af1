//! SmartBudgetX - Terminal budgeting around the 50/30/20 guideline
//!
//! This library provides the core functionality for the SmartBudgetX
//! application: an itemized monthly ledger classified into needs, wants and
//! savings, a comparison against the 50/30/20 guideline, a suggested split of
//! leftover funds into investment buckets, and a one-page monthly report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expense rows, ledger, profile)
//! - `storage`: JSON session file storage layer
//! - `services`: Business logic layer (summary, advisor, ledger edits)
//! - `audit`: Audit logging system
//! - `setup`: The onboarding wizard
//! - `reports`: Insights, comparison and the monthly report layout
//! - `export`: Report renderers (pdf, text, json, yaml, csv)
//! - `display`, `cli`, `tui`: Presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use smartbudgetx::models::{ExpenseRow, Tag};
//! use smartbudgetx::services::{advise, summarize};
//!
//! let rows = vec![ExpenseRow::new("Rent", "1500", Tag::Need)];
//! let summary = summarize("4000", &rows);
//! let allocation = advise(summary.leftover, None);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod setup;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
