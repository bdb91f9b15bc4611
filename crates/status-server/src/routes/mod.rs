//! HTTP route handlers.

use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response for GET /.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Response for GET /health.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Build the application router. Unmatched paths get axum's default 404.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// GET / - greeting with the service version and current server time.
pub async fn root() -> Json<RootResponse> {
    tracing::debug!(target: "status::api", "Serving root status");

    Json(RootResponse {
        message: "Hello from DevOps Pipeline!",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

/// GET /health - liveness probe for orchestration tooling.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
