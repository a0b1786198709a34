//! Route comparison handler

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::super::state::AppState;
use super::super::types::{CompareMeta, CompareRoutesRequest, CompareRoutesResponse, ErrorResponse};
use super::helpers::{Rejection, bad_request, require_body};
use crate::routes::generate_routes;

/// Compare candidate routes for a corridor
///
/// POST /api/compare-routes
#[utoipa::path(
    post,
    path = "/api/compare-routes",
    request_body = CompareRoutesRequest,
    responses(
        (status = 200, description = "Candidate route set", body = CompareRoutesResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse)
    ),
    tag = "Routes"
)]
pub async fn compare_routes(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CompareRoutesRequest>, JsonRejection>,
) -> Result<Json<CompareRoutesResponse>, Rejection> {
    // 1. Reject malformed bodies
    let req = require_body(payload)?;

    // 2. Validate fields
    let origin = req.origin.unwrap_or_default();
    let destination = req.destination.unwrap_or_default();
    let amount = req.amount.unwrap_or(0.0);
    if origin.is_empty() || destination.is_empty() || amount <= 0.0 {
        return Err(bad_request(
            "Missing or invalid fields: origin, destination, amount",
        ));
    }

    // 3. Synthesize the candidate set (empty for unknown codes)
    let routes = generate_routes(
        &state.directory,
        &state.rates,
        &origin,
        &destination,
        amount,
        &mut rand::thread_rng(),
    );

    // 4. Respond with the demo's envelope
    Ok(Json(CompareRoutesResponse {
        routes,
        meta: CompareMeta {
            origin,
            destination,
            amount,
            queried_at: chrono::Utc::now().to_rfc3339(),
        },
    }))
}
