//! CLI command for the audit history

use crate::error::BudgetResult;
use crate::storage::Storage;

/// Handle `history`
pub fn handle_history_command(storage: &Storage, limit: usize) -> BudgetResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled in settings.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
