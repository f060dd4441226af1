//! Audit entry data structures
//!
//! An entry records one change to the session: what kind of thing changed,
//! which one, and its JSON value before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// A report file was written
    Export,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
            Operation::Export => "EXPORT",
        })
    }
}

/// What part of the session an entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Session,
    Income,
    ExpenseRow,
    Profile,
    Report,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::Session => "Session",
            EntityType::Income => "Income",
            EntityType::ExpenseRow => "ExpenseRow",
            EntityType::Profile => "Profile",
            EntityType::Report => "Report",
        })
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Row index, file path, or a fixed name such as "income"
    pub entity_id: String,

    /// Human-readable description (row label, profile name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType, entity_id: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for something that now exists
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            entity_name,
            after: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Create, entity_type, entity_id.into())
        }
    }

    /// Entry for a change; the diff summary is computed from both values
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => super::diff::generate_diff(b, a),
            _ => None,
        };

        Self {
            entity_name,
            before,
            after,
            diff_summary,
            ..Self::new(Operation::Update, entity_type, entity_id.into())
        }
    }

    /// Entry for something that was removed
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            entity_name,
            before: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Delete, entity_type, entity_id.into())
        }
    }

    /// Entry for a written report file
    pub fn export(path: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            entity_name: Some(format.into()),
            ..Self::new(Operation::Export, EntityType::Report, path.into())
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = self.entity_name.as_deref().filter(|n| !n.is_empty()) {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Export.to_string(), "EXPORT");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::ExpenseRow,
            "6",
            Some("Gym".to_string()),
            &json!({"label": "Gym", "amount": "40", "tag": "Want"}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::ExpenseRow);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry_computes_diff() {
        let entry = AuditEntry::update(
            EntityType::Income,
            "income",
            None,
            &json!({"income": "4000"}),
            &json!({"income": "4500"}),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("income: \"4000\" -> \"4500\"")
        );
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(EntityType::ExpenseRow, "0", None, &json!({"label": "Rent"}));
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = AuditEntry::export("/tmp/SmartBudgetX_Report.pdf", "pdf");
        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"entity_type\":\"report\""));

        let back: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back.operation, Operation::Export);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Profile,
            "profile",
            Some("Alex".to_string()),
            &json!({"name": "Alex"}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Profile profile (Alex)"));
    }
}
