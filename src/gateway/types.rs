//! Gateway request/response DTOs
//!
//! Request fields are all optional at the serde layer so the handlers can
//! report missing fields with the demo's exact 400 messages instead of a
//! deserializer rejection.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ProofOfPayment, RemittanceRoute};

/// Error body: `{"error": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Missing or invalid fields: origin, destination, amount")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CompareRoutesRequest {
    #[schema(example = "US")]
    pub origin: Option<String>,
    #[schema(example = "MX")]
    pub destination: Option<String>,
    #[schema(example = 500.0)]
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareMeta {
    pub origin: String,
    pub destination: String,
    pub amount: f64,
    pub queried_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompareRoutesResponse {
    pub routes: Vec<RemittanceRoute>,
    pub meta: CompareMeta,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteTransferRequest {
    #[schema(example = "route-anc-1-anc-2-ab12")]
    pub route_id: Option<String>,
    #[schema(example = 500.0)]
    pub amount: Option<f64>,
    pub use_escrow: Option<bool>,
}

/// Transfer record as the execute endpoint reports it. The mock settles
/// instantly, so status is always `completed`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecutedTransfer {
    pub id: String,
    pub route_id: String,
    pub amount: f64,
    pub use_escrow: bool,
    #[schema(example = "completed")]
    pub status: String,
    pub created_at: String,
    pub completed_at: String,
    pub stellar_tx_hash: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExecuteTransferResponse {
    pub transaction: ExecutedTransfer,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateProofRequest {
    #[schema(example = "POP-1700000000000-AB12CD")]
    pub transaction_id: Option<String>,
}

/// Proof document plus the explorer link for its settlement hash.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProofDocument {
    #[serde(flatten)]
    pub proof: ProofOfPayment,
    pub verification_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateProofResponse {
    pub proof: ProofDocument,
}
