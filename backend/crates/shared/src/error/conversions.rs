//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! plus the HTTP response translation when the `axum` feature is enabled.

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error class 23 = integrity constraint violation
                let app_err = match db_err.code().as_deref() {
                    Some(code) if code.starts_with("23") => {
                        AppError::conflict("Integrity constraint violation")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// HTTP response translation (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
mod axum_response {
    use axum::Json;
    use axum::response::{IntoResponse, Response};
    use http::StatusCode;
    use serde_json::json;

    use super::AppError;

    /// Generic 5xx body; internal detail never reaches the caller.
    const SERVER_FAULT_MESSAGE: &str = "terjadi kegagalan pada server kami";

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            let body = if self.is_server_error() {
                json!({
                    "status": "error",
                    "message": SERVER_FAULT_MESSAGE,
                })
            } else {
                json!({
                    "status": "fail",
                    "message": self.message(),
                })
            };

            (status, Json(body)).into_response()
        }
    }
}
