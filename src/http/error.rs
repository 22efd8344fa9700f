//! API error taxonomy and response mapping.
//!
//! Every variant maps to exactly one status code and one wire message;
//! the response body is a JSON envelope of the form `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::store::StoreError;

/// Errors a handler can return to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Request body was not valid JSON.
    #[error("Invalid input")]
    InvalidInput,
    /// Create payload carried an empty or missing body field.
    #[error("Todo body is required")]
    EmptyBody,
    /// Path id segment did not parse as an integer.
    #[error("Invalid ID")]
    InvalidId,
    /// No todo with the requested id.
    #[error("todo not found")]
    NotFound,
}

impl ApiError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput | ApiError::EmptyBody | ApiError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyBody => ApiError::EmptyBody,
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "Request rejected");

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
