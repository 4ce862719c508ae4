use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::main_lib::AppState;

pub mod budget;
pub mod fiscal;
pub mod roadmap;
pub mod settings;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn app_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .merge(settings::router())
        .merge(roadmap::router())
        .merge(fiscal::router())
        .merge(budget::router())
}
