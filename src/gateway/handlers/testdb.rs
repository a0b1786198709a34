//! Database connectivity test handler

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::ErrorResponse;
use crate::store::{NewRemittance, RemittanceRow};

#[derive(Debug, Serialize, ToSchema)]
pub struct TestDbResponse {
    pub inserted: RemittanceRow,
}

/// Insert a fixed probe row into the remittances table
///
/// GET /api/test-db
#[utoipa::path(
    get,
    path = "/api/test-db",
    responses(
        (status = 200, description = "Probe row inserted", body = TestDbResponse),
        (status = 500, description = "Backend unavailable", body = ErrorResponse)
    ),
    tag = "System"
)]
pub async fn test_db(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TestDbResponse>, (StatusCode, Json<ErrorResponse>)> {
    let probe = NewRemittance {
        sender_wallet: "PayOnProofWallet1".to_string(),
        origin_country: "CR".to_string(),
        destination_country: "CO".to_string(),
        amount: 100.0,
        status: "pending".to_string(),
    };

    match state.store.insert_remittance(probe).await {
        Ok(inserted) => Ok(Json(TestDbResponse { inserted })),
        Err(err) => {
            tracing::error!(%err, "remittance probe insert failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(err.to_string())),
            ))
        }
    }
}
