//! Error types for the cache sidecar
//!
//! The session cache itself never fails; these errors only describe HTTP
//! request outcomes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
#[derive(Error, Debug)]
pub enum ApiError {
    /// No open session with this id
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Key absent or expired in the session cache
    #[error("Cache miss: {0}")]
    Miss(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::SessionNotFound(_) | ApiError::Miss(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
pub type Result<T> = std::result::Result<T, ApiError>;
