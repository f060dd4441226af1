//! Storage layer for SmartBudgetX
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit hooks every mutating service goes through.

pub mod file_io;
pub mod session;

pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use session::SessionRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetError;

/// Main storage coordinator
pub struct Storage {
    paths: BudgetPaths,
    pub session: SessionRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance; audit logging follows the settings
    pub fn new(paths: BudgetPaths, settings: &Settings) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            session: SessionRepository::new(paths.session_file()),
            audit,
            paths,
        })
    }

    /// Create storage and load the saved session in one step
    pub fn open(paths: BudgetPaths, settings: &Settings) -> Result<Self, BudgetError> {
        let storage = Self::new(paths, settings)?;
        storage.load()?;
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load(&self) -> Result<(), BudgetError> {
        self.session.load()
    }

    /// Save all data to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        self.session.save()
    }

    /// Check if a session has been written yet
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// The audit logger, when auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn log(&self, entry: AuditEntry) -> Result<(), BudgetError> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    /// Record the creation of an entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BudgetError> {
        self.log(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record a change to an entity
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), BudgetError> {
        self.log(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    /// Record the removal of an entity
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BudgetError> {
        self.log(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Record that a report file was written
    pub fn log_export(&self, path: impl Into<String>, format: impl Into<String>) -> Result<(), BudgetError> {
        self.log(AuditEntry::export(path, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_storage(audit_enabled: bool) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled,
            ..Default::default()
        };
        let storage = Storage::new(paths, &settings).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage(true);

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());

        storage.save().unwrap();
        assert!(storage.is_initialized());
    }

    #[test]
    fn test_audit_written_when_enabled() {
        let (_temp, storage) = create_storage(true);
        storage
            .log_create(EntityType::Income, "income", None, &"4500")
            .unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Income);
    }

    #[test]
    fn test_audit_skipped_when_disabled() {
        let (temp_dir, storage) = create_storage(false);
        storage
            .log_export("report.pdf", "pdf")
            .unwrap();

        assert!(storage.audit().is_none());
        assert!(!temp_dir.path().join("audit.log").exists());
    }
}
