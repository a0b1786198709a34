//! Transfer execution handler (server-side mock)
//!
//! Disconnected from the in-process transfer state machine on purpose: this
//! surface settles instantly and exists for API consumers, while the UI
//! drives `crate::transfer` directly.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::super::state::AppState;
use super::super::types::{ErrorResponse, ExecuteTransferRequest, ExecuteTransferResponse, ExecutedTransfer};
use super::helpers::{Rejection, bad_request, require_body};
use crate::models::{settlement_hash, transaction_id};

/// Execute a transfer over a previously quoted route
///
/// POST /api/execute-transfer
#[utoipa::path(
    post,
    path = "/api/execute-transfer",
    request_body = ExecuteTransferRequest,
    responses(
        (status = 200, description = "Instantly settled mock transaction", body = ExecuteTransferResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse)
    ),
    tag = "Transfers"
)]
pub async fn execute_transfer(
    State(_state): State<Arc<AppState>>,
    payload: Result<Json<ExecuteTransferRequest>, JsonRejection>,
) -> Result<Json<ExecuteTransferResponse>, Rejection> {
    // 1. Reject malformed bodies
    let req = require_body(payload)?;

    // 2. Validate fields
    let route_id = req.route_id.unwrap_or_default();
    let amount = req.amount.unwrap_or(0.0);
    if route_id.is_empty() || amount <= 0.0 {
        return Err(bad_request("Missing or invalid fields: routeId, amount"));
    }

    // 3. Synthesize the settled transaction
    let mut rng = rand::thread_rng();
    let now = chrono::Utc::now().to_rfc3339();
    let transaction = ExecutedTransfer {
        id: transaction_id(&mut rng),
        route_id,
        amount,
        use_escrow: req.use_escrow.unwrap_or(false),
        status: "completed".to_string(),
        created_at: now.clone(),
        completed_at: now,
        stellar_tx_hash: settlement_hash(&mut rng),
    };

    Ok(Json(ExecuteTransferResponse { transaction }))
}
