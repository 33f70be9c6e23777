//! Error types for the API server.
//!
//! Every failure is rendered as `{ "success": false, "error": "..." }` with
//! the matching HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use circle_core::CalcError;
use tracing::{error, warn};

use crate::dto::ErrorResponse;

/// Message for any unexpected server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Please try again later.";

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A calculation input failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// The request itself could not be understood
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal() -> Self {
        ApiError::Internal(INTERNAL_ERROR_MESSAGE.to_string())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CalcError> for ApiError {
    fn from(error: CalcError) -> Self {
        match error {
            CalcError::InvalidInput { reason, .. } => ApiError::InvalidInput(reason),
            CalcError::Internal { message } => {
                error!(%message, "Calculation failed unexpectedly");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
