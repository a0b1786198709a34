//! Proof of Payment handler (server-side mock)
//!
//! Returns a fixed placeholder document until transactions are actually
//! recorded; only the settlement hash and explorer link are synthesized.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::super::state::AppState;
use super::super::types::{ErrorResponse, GenerateProofRequest, GenerateProofResponse, ProofDocument};
use super::helpers::{Rejection, bad_request, require_body};
use crate::models::{ProofOfPayment, ProofStatus, proof_id, settlement_hash};

/// Generate a Proof of Payment document for a transaction
///
/// POST /api/generate-proof
#[utoipa::path(
    post,
    path = "/api/generate-proof",
    request_body = GenerateProofRequest,
    responses(
        (status = 200, description = "Placeholder proof document", body = GenerateProofResponse),
        (status = 400, description = "Missing transactionId", body = ErrorResponse)
    ),
    tag = "Proofs"
)]
pub async fn generate_proof(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateProofRequest>, JsonRejection>,
) -> Result<Json<GenerateProofResponse>, Rejection> {
    // 1. Reject malformed bodies
    let req = require_body(payload)?;

    // 2. Validate fields
    let transaction_id = req.transaction_id.unwrap_or_default();
    if transaction_id.is_empty() {
        return Err(bad_request("Missing field: transactionId"));
    }

    // 3. Build the placeholder document
    let tx_hash = settlement_hash(&mut rand::thread_rng());
    let proof = ProofOfPayment {
        id: proof_id(),
        transaction_id,
        timestamp: chrono::Utc::now().to_rfc3339(),
        sender: "User Wallet (placeholder)".to_string(),
        receiver: "Recipient (placeholder)".to_string(),
        origin_amount: 500.0,
        origin_currency: "USD".to_string(),
        destination_amount: 8500.0,
        destination_currency: "MXN".to_string(),
        exchange_rate: 17.15,
        total_fees: 6.0,
        route: "MoneyGram > Bitso".to_string(),
        stellar_tx_hash: tx_hash.clone(),
        status: ProofStatus::Verified,
    };
    let verification_url = state.ledger.verification_url(&tx_hash);

    Ok(Json(GenerateProofResponse {
        proof: ProofDocument {
            proof,
            verification_url,
        },
    }))
}
