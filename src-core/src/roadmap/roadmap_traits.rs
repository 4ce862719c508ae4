use crate::errors::Result;
use crate::roadmap::roadmap_commands::TargetCommand;
use crate::roadmap::roadmap_model::{RoadmapOverview, YearlyTarget};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait RoadmapServiceTrait: Send + Sync {
    async fn get_targets(&self) -> Result<Vec<YearlyTarget>>;
    async fn replace_targets(&self, targets: Vec<YearlyTarget>) -> Result<Vec<YearlyTarget>>;
    async fn apply_command(&self, command: TargetCommand) -> Result<Vec<YearlyTarget>>;
    async fn get_overview(
        &self,
        elapsed_override: Option<u32>,
        today: NaiveDate,
    ) -> Result<RoadmapOverview>;
}
