use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use mietoru_core::fiscal::{fiscal_month_sequence, FiscalMonth};
use serde::Deserialize;

use crate::{error::ApiResult, extract::AppQuery, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FiscalMonthsQuery {
    start_month: Option<u32>,
    count: Option<u32>,
}

/// Month labels in fiscal order
/// Query params:
///   startMonth: 1-12 (optional, defaults to the profile's fiscal year start)
///   count: 1-12 (optional, defaults to 12)
async fn get_fiscal_months(
    AppQuery(query): AppQuery<FiscalMonthsQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FiscalMonth>>> {
    let start_month = match query.start_month {
        Some(month) => month,
        None => state.settings_service.get_profile().await?.fiscal_year_start_month,
    };
    let months = fiscal_month_sequence(start_month, query.count.unwrap_or(12))?;
    Ok(Json(months))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/fiscal/months", get(get_fiscal_months))
}
