//! Server error types.
//!
//! API errors map to the JSON envelope the frontend expects:
//! `{ "status": "error", "message": "..." }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error envelope returned by the API.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    /// Always `"error"`.
    pub(crate) status: &'static str,
    /// Human-readable message.
    pub(crate) message: String,
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Unknown blog post id.
    #[error("Blog post not found.")]
    PostNotFound,
    /// Contact form with missing or empty fields.
    #[error("Name, email, and message are required.")]
    MissingContactFields,
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::PostNotFound => StatusCode::NOT_FOUND,
            ServerError::MissingContactFields => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: "error",
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
