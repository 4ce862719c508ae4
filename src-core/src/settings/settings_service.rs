use crate::errors::Result;
use crate::settings::settings_model::BusinessProfile;
use crate::settings::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use async_trait::async_trait;
use std::sync::Arc;

pub struct SettingsService<T: SettingsRepositoryTrait> {
    settings_repo: Arc<T>,
}

impl<T: SettingsRepositoryTrait> SettingsService<T> {
    pub fn new(settings_repo: Arc<T>) -> Self {
        SettingsService { settings_repo }
    }
}

#[async_trait]
impl<T: SettingsRepositoryTrait> SettingsServiceTrait for SettingsService<T> {
    async fn get_profile(&self) -> Result<BusinessProfile> {
        self.settings_repo.load_profile().await
    }

    async fn update_profile(&self, profile: BusinessProfile) -> Result<BusinessProfile> {
        if let Err(e) = profile.validate() {
            log::warn!("Rejected profile update: {}", e);
            return Err(e);
        }
        log::debug!(
            "Updating profile: assets={}, fiscal start month={}",
            profile.current_assets,
            profile.fiscal_year_start_month
        );
        self.settings_repo.save_profile(profile).await
    }
}
