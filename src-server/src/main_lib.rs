use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use chrono::NaiveDate;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use mietoru_core::roadmap::{RoadmapService, RoadmapServiceTrait};
use mietoru_core::settings::{
    BusinessProfile, InMemorySettingsRepository, SettingsService, SettingsServiceTrait,
};

use crate::api;
use crate::config::{LogFormat, ServerConfig};

pub struct AppState {
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub roadmap_service: Arc<dyn RoadmapServiceTrait>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mietoru_server=info,mietoru_core=info,tower_http=info".into());

    match format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

/// Builds the seed profile from config and wires the services around one
/// shared in-memory repository.
pub fn build_state(config: &ServerConfig, today: NaiveDate) -> anyhow::Result<Arc<AppState>> {
    let mut profile = BusinessProfile::new(today);
    if let Some(assets) = config.seed_current_assets {
        profile.current_assets = assets;
    }
    if let Some(month) = config.seed_fiscal_year_start_month {
        profile.fiscal_year_start_month = month;
    }
    if let Some(count) = config.seed_employee_count {
        profile.employee_count = count;
    }
    let settings_repo = Arc::new(
        InMemorySettingsRepository::new(profile)
            .context("Invalid seed profile from MIETORU_* settings")?,
    );

    Ok(Arc::new(AppState {
        settings_service: Arc::new(SettingsService::new(settings_repo.clone())),
        roadmap_service: Arc::new(RoadmapService::new(settings_repo)),
    }))
}

pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> anyhow::Result<Router> {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins = config
            .cors_allow_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{}'", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api/v1", api::app_router())
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let state = build_state(&config, today)?;
    let app = build_router(state, &config)?;

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Mietoru API listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
