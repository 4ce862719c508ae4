use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::Result;
use crate::roadmap::roadmap_model::YearlyTarget;
use crate::settings::settings_model::{default_yearly_targets, BusinessProfile};
use crate::settings::settings_traits::{SettingsRepositoryTrait, TargetUpdate};

/// Process-local settings store. Contents are lost when the process exits.
pub struct InMemorySettingsRepository {
    profile: RwLock<BusinessProfile>,
    targets: RwLock<Vec<YearlyTarget>>,
}

impl InMemorySettingsRepository {
    /// Seeds the store with `profile` and the default target table sized to
    /// the profile's headcount.
    pub fn new(profile: BusinessProfile) -> Result<Self> {
        profile.validate()?;
        let targets = default_yearly_targets(profile.employee_count)?;
        Ok(Self::with_targets(profile, targets))
    }

    pub fn with_targets(profile: BusinessProfile, targets: Vec<YearlyTarget>) -> Self {
        Self {
            profile: RwLock::new(profile),
            targets: RwLock::new(targets),
        }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for InMemorySettingsRepository {
    async fn load_profile(&self) -> Result<BusinessProfile> {
        Ok(self.profile.read().await.clone())
    }

    async fn save_profile(&self, profile: BusinessProfile) -> Result<BusinessProfile> {
        let mut guard = self.profile.write().await;
        *guard = profile.clone();
        Ok(profile)
    }

    async fn load_targets(&self) -> Result<Vec<YearlyTarget>> {
        Ok(self.targets.read().await.clone())
    }

    async fn save_targets(&self, targets: Vec<YearlyTarget>) -> Result<Vec<YearlyTarget>> {
        let mut guard = self.targets.write().await;
        *guard = targets.clone();
        Ok(targets)
    }

    async fn update_targets(&self, update: TargetUpdate) -> Result<Vec<YearlyTarget>> {
        let mut guard = self.targets.write().await;
        let updated = update(guard.as_slice())?;
        *guard = updated.clone();
        Ok(updated)
    }
}
