use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use mietoru_core::budget::{
    compare_budget, fiscal_budget_entries, year_over_year_change, BudgetComparison,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    extract::AppJson,
    main_lib::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BudgetComparisonRequest {
    /// Defaults to the profile's fiscal year start
    fiscal_year_start_month: Option<u32>,
    targets: Vec<f64>,
    actuals: Vec<f64>,
    previous_year_actuals: Option<Vec<f64>>,
    /// Optional second series for the profit columns of the same months
    profit_targets: Option<Vec<f64>>,
    profit_actuals: Option<Vec<f64>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BudgetComparisonResponse {
    #[serde(flatten)]
    comparison: BudgetComparison,
    /// Change of total actuals against the same months of the previous year
    year_over_year_change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profit: Option<BudgetComparison>,
}

async fn compare(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<BudgetComparisonRequest>,
) -> ApiResult<Json<BudgetComparisonResponse>> {
    let start_month = match req.fiscal_year_start_month {
        Some(month) => month,
        None => state.settings_service.get_profile().await?.fiscal_year_start_month,
    };

    let entries = fiscal_budget_entries(start_month, &req.targets, &req.actuals)?;
    let comparison = compare_budget(&entries)?;

    let year_over_year_change = match &req.previous_year_actuals {
        Some(previous) if previous.len() != req.actuals.len() => {
            return Err(ApiError::BadRequest(format!(
                "previousYearActuals has {} months, expected {}",
                previous.len(),
                req.actuals.len()
            )));
        }
        Some(previous) => year_over_year_change(comparison.total_actual, previous.iter().sum()),
        None => None,
    };

    let profit = match (&req.profit_targets, &req.profit_actuals) {
        (Some(targets), Some(actuals)) => {
            if targets.len() != req.targets.len() {
                return Err(ApiError::BadRequest(format!(
                    "profitTargets has {} months, expected {}",
                    targets.len(),
                    req.targets.len()
                )));
            }
            let entries = fiscal_budget_entries(start_month, targets, actuals)?;
            Some(compare_budget(&entries)?)
        }
        (None, None) => None,
        _ => {
            return Err(ApiError::BadRequest(
                "profitTargets and profitActuals must be sent together".to_string(),
            ))
        }
    };

    Ok(Json(BudgetComparisonResponse {
        comparison,
        year_over_year_change,
        profit,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/budget/comparison", post(compare))
}
