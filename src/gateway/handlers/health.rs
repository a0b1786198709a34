//! Health check handler

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Per-service integration status. Everything is a placeholder until the
/// real backends are wired in.
#[derive(Serialize, ToSchema)]
pub struct ServiceStatuses {
    #[schema(example = "placeholder")]
    pub stellar: String,
    #[schema(example = "placeholder")]
    pub database: String,
    #[schema(example = "placeholder")]
    pub anchors: String,
}

/// Health check response data
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub timestamp: String,
    pub services: ServiceStatuses,
}

/// Health check endpoint
///
/// GET /api/health
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        services: ServiceStatuses {
            stellar: "placeholder".to_string(),
            database: "placeholder".to_string(),
            anchors: "placeholder".to_string(),
        },
    })
}
