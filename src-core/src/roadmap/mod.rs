pub mod roadmap_commands;
pub mod roadmap_guides;
pub mod roadmap_model;
pub mod roadmap_projector;
pub mod roadmap_service;
pub mod roadmap_traits;

pub use roadmap_commands::{TargetCommand, TargetField};
pub use roadmap_guides::{all_year_guides, year_guide};
pub use roadmap_model::{
    BusinessPhase, CurrentPosition, MilestoneProgress, MonthlyProgress, PhaseSummary,
    RoadmapOverview, RoadmapProjection, YearGuide, YearlyTarget,
};
pub use roadmap_projector::{
    project, project_with, validate_targets, ActualNetWorthSource, DampedEstimate, MonthContext,
    RecordedActuals,
};
pub use roadmap_service::{resolve_elapsed_months, RoadmapService};
pub use roadmap_traits::RoadmapServiceTrait;
