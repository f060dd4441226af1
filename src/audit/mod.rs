//! Audit logging system for SmartBudgetX
//!
//! Records every change to the session (income, expense rows, onboarding
//! profile) and every report export in an append-only JSONL log.
//!
//! - `AuditEntry`: one record with timestamp, operation, entity and optional
//!   before/after values.
//! - `AuditLogger`: appends entries to, and reads them from, the log file.
//! - `generate_diff`: one-line summary of the fields that changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
