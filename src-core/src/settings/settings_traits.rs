use crate::errors::Result;
use crate::roadmap::roadmap_model::YearlyTarget;
use crate::settings::settings_model::BusinessProfile;
use async_trait::async_trait;

/// Edit applied to the stored target table by [`SettingsRepositoryTrait::update_targets`]
pub type TargetUpdate =
    Box<dyn FnOnce(&[YearlyTarget]) -> Result<Vec<YearlyTarget>> + Send>;

/// Storage for the business profile and the yearly target table
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    async fn load_profile(&self) -> Result<BusinessProfile>;
    async fn save_profile(&self, profile: BusinessProfile) -> Result<BusinessProfile>;
    async fn load_targets(&self) -> Result<Vec<YearlyTarget>>;
    async fn save_targets(&self, targets: Vec<YearlyTarget>) -> Result<Vec<YearlyTarget>>;
    /// Read-modify-write of the target table. No other write can interleave
    /// between reading the current table and storing the result; on error
    /// the stored table is left as it was.
    async fn update_targets(&self, update: TargetUpdate) -> Result<Vec<YearlyTarget>>;
}

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    async fn get_profile(&self) -> Result<BusinessProfile>;
    async fn update_profile(&self, profile: BusinessProfile) -> Result<BusinessProfile>;
}
