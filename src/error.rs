//! Custom error types for SmartBudgetX
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Numeric parsing never produces an error;
//! these variants cover configuration, storage, export and terminal failures.

use thiserror::Error;

/// The main error type for SmartBudgetX operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Rejected user input (unknown tag, preference, or investment area)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BudgetError {
    /// Create a "not found" error for expense rows
    pub fn row_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Expense row",
            identifier: index.to_string(),
        }
    }

    /// Create a "not found" error for the onboarding profile
    pub fn profile_not_found() -> Self {
        Self::NotFound {
            entity_type: "Profile",
            identifier: "current session".to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BudgetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for SmartBudgetX operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_row_not_found_error() {
        let err = BudgetError::row_not_found(7);
        assert_eq!(err.to_string(), "Expense row not found: 7");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_error() {
        let err = BudgetError::Validation("unknown tag 'Luxury'".into());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: unknown tag 'Luxury'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }
}
