use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use mietoru_core::settings::BusinessProfile;

use crate::{error::ApiResult, extract::AppJson, main_lib::AppState};

async fn get_profile(State(state): State<Arc<AppState>>) -> ApiResult<Json<BusinessProfile>> {
    let profile = state.settings_service.get_profile().await?;
    Ok(Json(profile))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    AppJson(profile): AppJson<BusinessProfile>,
) -> ApiResult<Json<BusinessProfile>> {
    let p = state.settings_service.update_profile(profile).await?;
    tracing::info!(
        fiscal_year_start_month = p.fiscal_year_start_month,
        "Profile updated"
    );
    Ok(Json(p))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings/profile", get(get_profile).put(update_profile))
}
