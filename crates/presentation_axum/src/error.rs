//! API error handling
//!
//! The benchmark contract has exactly one user-visible error: an unmatched
//! route answers 404 with the fixed body `{"error":"Not found"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Not found"),
        };

        let body = ErrorResponse {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
