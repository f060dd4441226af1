//! Session repository for JSON storage
//!
//! Manages loading and saving the ledger and profile to data/session.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::Session;

use super::file_io::{read_json, write_json_atomic};

/// Repository for session persistence
pub struct SessionRepository {
    path: PathBuf,
    data: RwLock<Session>,
}

impl SessionRepository {
    /// Create a repository holding a fresh session until `load` is called
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Session::default()),
        }
    }

    /// Load the session from disk; a missing file yields a fresh session
    pub fn load(&self) -> Result<(), BudgetError> {
        let session: Session = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = session;

        Ok(())
    }

    /// Save the session to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// A snapshot of the current session
    pub fn get(&self) -> Result<Session, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Mutate the session in place and bump its timestamp
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Result<R, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let result = f(&mut data);
        data.touch();
        Ok(result)
    }

    /// Replace the whole session
    pub fn replace(&self, session: Session) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = session;
        Ok(())
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OnboardingProfile, Tag};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, SessionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("session.json");
        (temp_dir, SessionRepository::new(path))
    }

    #[test]
    fn test_load_missing_file_gives_template_session() {
        let (_temp, repo) = create_test_repo();
        repo.load().unwrap();

        let session = repo.get().unwrap();
        assert_eq!(session.ledger.len(), 6);
        assert!(session.profile.is_none());
    }

    #[test]
    fn test_update_and_reload() {
        let (temp, repo) = create_test_repo();
        repo.load().unwrap();

        repo.update(|s| {
            s.ledger.set_income("4500");
            s.ledger.rows[0].amount = "1500".into();
            s.profile = Some(OnboardingProfile {
                name: "Alex".into(),
                ..Default::default()
            });
        })
        .unwrap();
        repo.save().unwrap();

        let reopened = SessionRepository::new(temp.path().join("data").join("session.json"));
        reopened.load().unwrap();
        let session = reopened.get().unwrap();
        assert_eq!(session.ledger.income, "4500");
        assert_eq!(session.ledger.rows[0].amount, "1500");
        assert_eq!(session.ledger.rows[0].tag, Tag::Need);
        assert_eq!(session.report_name(), Some("Alex"));
    }

    #[test]
    fn test_update_returns_closure_result() {
        let (_temp, repo) = create_test_repo();
        let index = repo.update(|s| s.ledger.add_row()).unwrap();
        assert_eq!(index, 6);
    }
}
