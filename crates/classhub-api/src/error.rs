//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use classhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-boundary wrapper around [`AppError`].
///
/// `AppError` lives in the core crate, which knows nothing about HTTP;
/// this newtype carries it across the Axum boundary. Handlers return
/// `Result<_, ApiError>` and `?` converts transparently.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match &err.kind {
            ErrorKind::Validation
            | ErrorKind::PasswordMismatch
            | ErrorKind::InvalidRole
            | ErrorKind::InvalidCredentials => StatusCode::BAD_REQUEST,
            ErrorKind::MissingToken => StatusCode::UNAUTHORIZED,
            ErrorKind::InvalidToken | ErrorKind::ExpiredToken | ErrorKind::Authorization => {
                StatusCode::FORBIDDEN
            }
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::DuplicateEmail | ErrorKind::AlreadyEnrolled | ErrorKind::Conflict => {
                StatusCode::CONFLICT
            }
            ErrorKind::Serialization | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %err.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}
