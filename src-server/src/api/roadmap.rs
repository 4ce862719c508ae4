use std::sync::Arc;

use crate::{
    error::ApiResult,
    extract::{AppJson, AppQuery},
    main_lib::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use mietoru_core::roadmap::{
    project_with, ActualNetWorthSource, DampedEstimate, RecordedActuals, RoadmapOverview,
    TargetCommand, YearlyTarget,
};
use serde::Deserialize;

async fn get_targets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<YearlyTarget>>> {
    let targets = state.roadmap_service.get_targets().await?;
    Ok(Json(targets))
}

async fn replace_targets(
    State(state): State<Arc<AppState>>,
    AppJson(targets): AppJson<Vec<YearlyTarget>>,
) -> ApiResult<Json<Vec<YearlyTarget>>> {
    let t = state.roadmap_service.replace_targets(targets).await?;
    Ok(Json(t))
}

async fn apply_target_command(
    State(state): State<Arc<AppState>>,
    AppJson(command): AppJson<TargetCommand>,
) -> ApiResult<Json<Vec<YearlyTarget>>> {
    tracing::debug!(?command, "Applying target command");
    let t = state.roadmap_service.apply_command(command).await?;
    Ok(Json(t))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverviewQuery {
    elapsed_months: Option<u32>,
}

/// Roadmap overview for the stored profile and targets
/// Query params:
///   elapsedMonths: months since roadmap start (optional, defaults to the
///   profile's roadmapStartDate, or 0 when unset)
async fn get_overview(
    AppQuery(query): AppQuery<OverviewQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RoadmapOverview>> {
    let today = chrono::Local::now().date_naive();
    let overview = state
        .roadmap_service
        .get_overview(query.elapsed_months, today)
        .await?;
    Ok(Json(overview))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookedActual {
    month: u32,
    net_worth: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionRequest {
    targets: Vec<YearlyTarget>,
    current_assets: f64,
    elapsed_months: u32,
    damping_factor: Option<f64>,
    #[serde(default)]
    booked_actuals: Vec<BookedActual>,
}

/// Stateless projection of the targets in the request body
async fn project_roadmap(
    AppJson(req): AppJson<ProjectionRequest>,
) -> ApiResult<Json<RoadmapOverview>> {
    let estimate = match req.damping_factor {
        Some(factor) => DampedEstimate::new(factor)?,
        None => DampedEstimate::default(),
    };

    let source: Box<dyn ActualNetWorthSource + Send> = if req.booked_actuals.is_empty() {
        Box::new(estimate)
    } else {
        let booked = req.booked_actuals.iter().map(|b| (b.month, b.net_worth));
        Box::new(RecordedActuals::new(booked)?.with_fallback(estimate))
    };

    let projection = project_with(
        source.as_ref(),
        &req.targets,
        req.current_assets,
        req.elapsed_months,
    )?;
    Ok(Json(RoadmapOverview::from_projection(
        projection,
        &req.targets,
        req.current_assets,
    )))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/roadmap/targets", get(get_targets).put(replace_targets))
        .route("/roadmap/targets/commands", post(apply_target_command))
        .route("/roadmap/overview", get(get_overview))
        .route("/roadmap/projection", post(project_roadmap))
}
