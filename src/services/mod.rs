//! Service layer for SmartBudgetX
//!
//! `summary` and `advisor` are pure computations over in-memory values.
//! `ledger` and `profile` wrap them around the stored session, handling
//! persistence and audit logging.

pub mod advisor;
pub mod ledger;
pub mod profile;
pub mod summary;

pub use advisor::{advise, Allocation, AllocationBucket, Strategy, TIPS};
pub use ledger::LedgerService;
pub use profile::ProfileService;
pub use summary::{summarize, summarize_ledger, ChartData, ChartPoint, DerivedSummary, IdealDistribution};
