/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers can
 * return `Result<Json<T>, BackendError>` directly.
 *
 * # Response Format
 *
 * Every error response uses the same JSON envelope:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 401
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::backend::error::types::BackendError;

/// The JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: String,
    pub status: u16,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: status.as_u16(),
        }
    }
}

/// Render an envelope with its status code
pub fn envelope_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorEnvelope::new(status, message))).into_response()
}

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Server-side failures are logged here with full detail; the client
    /// only sees the generic message.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_server_fault() {
            tracing::error!("Request failed: {:?}", self);
        }
        envelope_response(status, self.message())
    }
}

/// Fallback for unknown routes
pub async fn not_found_fallback() -> Response {
    envelope_response(StatusCode::NOT_FOUND, "Route not found")
}

/// Fallback for a known path requested with an unsupported method
pub async fn method_not_allowed_fallback() -> Response {
    envelope_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
