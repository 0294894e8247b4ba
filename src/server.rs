//! Dashboard server surface.
//!
//! Serves the rendered comparison page plus the two illustrative report
//! API endpoints (`/v1/data`, `/v1/process`). The API endpoints are not
//! consumed by the dashboard; they are the stateless sibling surface of
//! the benchmarked routers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::report::ReportRenderer;
use crate::view::ComparisonView;

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    config: Arc<ReportConfig>,
}

/// Build the dashboard router. Extracted from the binary for testing.
pub fn router(config: ReportConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(dashboard_page))
        .route("/v1/data", get(data_endpoint))
        .route("/v1/process", post(process_endpoint))
        .route("/api/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[derive(Deserialize)]
struct PageQuery {
    endpoint: Option<String>,
}

async fn dashboard_page(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut view = ComparisonView::new(state.config.series_theme()).map_err(internal_error)?;

    if let Some(name) = params.endpoint.as_deref() {
        view.select_by_name(name).map_err(|e| match e {
            ReportError::UnknownGroup(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            other => internal_error(other),
        })?;
    }

    let snapshot = view.snapshot().map_err(internal_error)?;
    let renderer = ReportRenderer::new((*state.config).clone());
    Ok(Html(renderer.render_page(&snapshot)))
}

async fn data_endpoint() -> Json<Value> {
    Json(json!({
        "data": {
            "id": 1,
            "name": "test",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }
    }))
}

async fn process_endpoint(Json(input): Json<Value>) -> Json<Value> {
    // Simulated processing delay, matching the benchmarked handler.
    tokio::time::sleep(Duration::from_millis(1)).await;

    Json(json!({
        "processed": true,
        "input": input,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "routerbench-dashboard",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn internal_error(e: ReportError) -> (StatusCode, String) {
    warn!("dashboard render failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
