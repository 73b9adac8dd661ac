//! Maps domain `AppError` to HTTP responses.
//!
//! `IntoResponse` and `AppError` are both foreign to this crate, so the
//! conversion lives on a local newtype. Handlers return
//! `Result<_, ApiError>` and the `?` operator converts through `From`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use bunkhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match &err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            ErrorKind::Database => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
            ErrorKind::Configuration | ErrorKind::Serialization | ErrorKind::Internal => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message.clone(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn domain_errors_map_to_http_statuses() {
        assert_eq!(status_of(AppError::validation("bad")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::not_found("gone")), StatusCode::NOT_FOUND);
        assert_eq!(status_of(AppError::conflict("taken")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(AppError::internal("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn question_mark_converts_app_errors() {
        fn handler_like() -> Result<(), ApiError> {
            fn service_like() -> Result<(), AppError> {
                Err(AppError::conflict("Bed already taken"))
            }
            service_like()?;
            Ok(())
        }

        let response = handler_like()
            .expect_err("conversion should carry the error")
            .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
