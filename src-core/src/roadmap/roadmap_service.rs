use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::constants::{MILESTONE_YEARS, ROADMAP_YEARS};
use crate::errors::Result;
use crate::fiscal::elapsed_months;
use crate::roadmap::roadmap_commands::{apply, TargetCommand};
use crate::roadmap::roadmap_guides::year_guide;
use crate::roadmap::roadmap_model::{
    CurrentPosition, MilestoneProgress, PhaseSummary, RoadmapOverview, RoadmapProjection,
    YearlyTarget,
};
use crate::roadmap::roadmap_projector::{project, validate_targets};
use crate::roadmap::roadmap_traits::RoadmapServiceTrait;
use crate::settings::settings_model::BusinessProfile;
use crate::settings::settings_traits::SettingsRepositoryTrait;

impl RoadmapOverview {
    /// Builds the page view model from a projection of `targets`.
    pub fn from_projection(
        projection: RoadmapProjection,
        targets: &[YearlyTarget],
        current_assets: f64,
    ) -> Self {
        let current_position = projection.current().map(CurrentPosition::from);

        let guide_year = match projection.current() {
            Some(month) => month.year,
            None => ROADMAP_YEARS as u32,
        };

        let current_net_worth = projection
            .last_completed()
            .map(|m| m.actual_net_worth)
            .unwrap_or(current_assets);

        RoadmapOverview {
            current_position,
            progress_percentage: projection.progress_percentage(),
            phases: phase_summaries(targets),
            current_guide: year_guide(guide_year),
            milestones: milestone_progress(targets, current_net_worth),
            projection,
        }
    }
}

/// Groups consecutive years that share a phase.
pub fn phase_summaries(targets: &[YearlyTarget]) -> Vec<PhaseSummary> {
    let mut summaries: Vec<PhaseSummary> = Vec::new();

    for target in targets {
        match summaries.last_mut() {
            Some(last) if last.phase == target.phase && last.last_year + 1 == target.year => {
                last.last_year = target.year;
                last.minimum_profit = last.minimum_profit.min(target.profit);
            }
            _ => summaries.push(PhaseSummary {
                phase: target.phase,
                first_year: target.year,
                last_year: target.year,
                minimum_profit: target.profit,
            }),
        }
    }

    summaries
}

/// Progress of `current_net_worth` towards the milestone years' targets.
pub fn milestone_progress(targets: &[YearlyTarget], current_net_worth: f64) -> Vec<MilestoneProgress> {
    MILESTONE_YEARS
        .iter()
        .filter_map(|year| targets.iter().find(|t| t.year == *year))
        .map(|t| MilestoneProgress {
            year: t.year,
            target: t.net_worth,
            current: current_net_worth,
            percentage: if t.net_worth == 0.0 {
                0.0
            } else {
                current_net_worth / t.net_worth * 100.0
            },
        })
        .collect()
}

pub struct RoadmapService<T: SettingsRepositoryTrait> {
    settings_repo: Arc<T>,
}

impl<T: SettingsRepositoryTrait> RoadmapService<T> {
    pub fn new(settings_repo: Arc<T>) -> Self {
        RoadmapService { settings_repo }
    }
}

/// Months elapsed on the roadmap: an explicit value wins, then the
/// profile's start date, otherwise the roadmap has not started.
pub fn resolve_elapsed_months(
    profile: &BusinessProfile,
    elapsed_override: Option<u32>,
    today: NaiveDate,
) -> u32 {
    elapsed_override.unwrap_or_else(|| {
        profile
            .roadmap_start_date
            .map(|start| elapsed_months(start, today))
            .unwrap_or(0)
    })
}

#[async_trait]
impl<T: SettingsRepositoryTrait> RoadmapServiceTrait for RoadmapService<T> {
    async fn get_targets(&self) -> Result<Vec<YearlyTarget>> {
        self.settings_repo.load_targets().await
    }

    async fn replace_targets(&self, targets: Vec<YearlyTarget>) -> Result<Vec<YearlyTarget>> {
        if let Err(e) = validate_targets(&targets) {
            log::warn!("Rejected target table: {}", e);
            return Err(e.into());
        }
        self.settings_repo.save_targets(targets).await
    }

    async fn apply_command(&self, command: TargetCommand) -> Result<Vec<YearlyTarget>> {
        self.settings_repo
            .update_targets(Box::new(move |current: &[YearlyTarget]| apply(current, &command)))
            .await
    }

    async fn get_overview(
        &self,
        elapsed_override: Option<u32>,
        today: NaiveDate,
    ) -> Result<RoadmapOverview> {
        let profile = self.settings_repo.load_profile().await?;
        let targets = self.settings_repo.load_targets().await?;
        let elapsed = resolve_elapsed_months(&profile, elapsed_override, today);

        let projection = project(&targets, profile.current_assets, elapsed)?;
        Ok(RoadmapOverview::from_projection(
            projection,
            &targets,
            profile.current_assets,
        ))
    }
}
