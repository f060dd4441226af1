//! Profile service
//!
//! Stores the profile emitted by the onboarding wizard. Finishing the wizard
//! again replaces the stored profile.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::OnboardingProfile;
use crate::storage::Storage;

/// Service for the onboarding profile
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored profile, if onboarding has finished
    pub fn get(&self) -> BudgetResult<Option<OnboardingProfile>> {
        Ok(self.storage.session.get()?.profile)
    }

    /// The stored profile, or a not-found error
    pub fn require(&self) -> BudgetResult<OnboardingProfile> {
        self.get()?.ok_or_else(BudgetError::profile_not_found)
    }

    /// Store a finished profile, overwriting any previous one
    pub fn complete(&self, profile: OnboardingProfile) -> BudgetResult<OnboardingProfile> {
        let previous = self
            .storage
            .session
            .update(|s| s.profile.replace(profile.clone()))?;
        self.storage.save()?;

        let name = Some(profile.display_name().to_string());
        match previous {
            Some(before) => {
                self.storage
                    .log_update(EntityType::Profile, "profile", name, &before, &profile)?;
                info!("Onboarding profile replaced");
            }
            None => {
                self.storage
                    .log_create(EntityType::Profile, "profile", name, &profile)?;
                info!("Onboarding profile created");
            }
        }

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::{BudgetPaths, Settings};
    use crate::models::{InvestArea, StockPreference};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_no_profile_before_onboarding() {
        let (_temp, storage) = create_test_storage();
        let service = ProfileService::new(&storage);
        assert!(service.get().unwrap().is_none());
        assert!(service.require().unwrap_err().is_not_found());
    }

    #[test]
    fn test_complete_then_overwrite() {
        let (_temp, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let mut profile = OnboardingProfile {
            name: "Alex".into(),
            stock_pref: Some(StockPreference::Tech),
            ..Default::default()
        };
        service.complete(profile.clone()).unwrap();

        profile.invest_areas.push(InvestArea::Crypto);
        profile.stock_pref = Some(StockPreference::Energy);
        service.complete(profile.clone()).unwrap();

        assert_eq!(service.require().unwrap(), profile);

        let ops: Vec<_> = storage
            .audit()
            .unwrap()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update]);
    }
}
