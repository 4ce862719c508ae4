pub mod settings_model;
pub mod settings_repository;
pub mod settings_service;
pub mod settings_traits;

pub use settings_model::{default_yearly_targets, BusinessProfile, LongTermGoal};
pub use settings_repository::InMemorySettingsRepository;
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait, TargetUpdate};
