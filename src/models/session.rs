//! Session model
//!
//! The ledger and the optional onboarding profile, as carried between CLI
//! invocations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ledger::Ledger;
use super::profile::OnboardingProfile;

/// Current session schema version
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Everything the user has entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Income and expense rows
    #[serde(default)]
    pub ledger: Ledger,

    /// Present once onboarding has finished
    #[serde(default)]
    pub profile: Option<OnboardingProfile>,

    /// When the session was last written
    pub updated_at: DateTime<Utc>,
}

fn default_schema_version() -> u32 {
    SESSION_SCHEMA_VERSION
}

impl Default for Session {
    fn default() -> Self {
        Self {
            schema_version: SESSION_SCHEMA_VERSION,
            ledger: Ledger::default(),
            profile: None,
            updated_at: Utc::now(),
        }
    }
}

impl Session {
    /// Mark the session as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Name used on reports when no profile exists
    pub fn report_name(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_template_rows_and_no_profile() {
        let session = Session::default();
        assert_eq!(session.ledger.len(), 6);
        assert!(session.profile.is_none());
        assert!(session.report_name().is_none());
    }

    #[test]
    fn test_report_name_ignores_blank_names() {
        let mut session = Session::default();
        session.profile = Some(OnboardingProfile::default());
        assert!(session.report_name().is_none());

        session.profile = Some(OnboardingProfile {
            name: "Alex".into(),
            ..Default::default()
        });
        assert_eq!(session.report_name(), Some("Alex"));
    }

    #[test]
    fn test_missing_ledger_defaults_to_template() {
        let json = r#"{"updated_at":"2025-01-01T00:00:00Z"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.ledger.len(), 6);
        assert_eq!(session.schema_version, SESSION_SCHEMA_VERSION);
    }
}
