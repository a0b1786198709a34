//! Handler helper functions

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use super::super::types::ErrorResponse;

pub type Rejection = (StatusCode, Json<ErrorResponse>);

/// 400 with the demo's `{"error": ...}` body.
pub fn bad_request(message: &str) -> Rejection {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

/// Unwrap a JSON body, mapping any parse failure to the generic 400.
pub fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Rejection> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(_) => Err(bad_request("Invalid request body")),
    }
}
