//! Gateway error types
//!
//! One taxonomy for everything a request handler can fail with. Validation
//! problems map to 400; anything that escapes statement execution maps to
//! 500 with the driver's message passed through verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway errors
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Missing required request field
    #[error("Missing required parameter: {0}")]
    MissingParam(String),

    /// Invalid request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Statement execution failure (connectivity, syntax, missing
    /// projection or model). Message comes from the driver unchanged.
    #[error("{0}")]
    Execution(String),
}

impl GatewayError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingParam(_) => StatusCode::BAD_REQUEST,
            GatewayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            GatewayError::Execution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body: every failure surfaces as `{"error": <message>}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<GatewayError> for ErrorResponse {
    fn from(err: GatewayError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            let message = self.to_string();
            Logger::error("request_failed", &[("error", &message)]);
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
