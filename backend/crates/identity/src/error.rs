//! Identity Error Types
//!
//! This module provides identity-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
///
/// The `#[error]` strings double as the user-facing messages; anything that
/// maps to a 5xx is replaced by a generic body at the boundary.
#[derive(Debug, Error)]
pub enum IdentityError {
    // ------------------------------------------------------------------
    // Registration payload validation (400)
    // ------------------------------------------------------------------
    /// Registration payload lacks username, password, or fullname
    #[error("tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada")]
    RegisterUserMissingProperty,

    /// Registration payload carries a non-string field
    #[error("tidak dapat membuat user baru karena tipe data tidak sesuai")]
    RegisterUserTypeMismatch,

    /// Username longer than 50 characters
    #[error("tidak dapat membuat user baru karena karakter username melebihi batas limit")]
    UsernameTooLong,

    /// Username contains characters outside `[A-Za-z0-9_]`
    #[error("tidak dapat membuat user baru karena username mengandung karakter terlarang")]
    UsernameRestrictedCharacter,

    /// Username already registered
    #[error("username tidak tersedia")]
    UsernameTaken,

    // ------------------------------------------------------------------
    // Login (400 on shape, 401 on credentials)
    // ------------------------------------------------------------------
    /// Login payload lacks username or password
    #[error("harus mengirimkan username dan password")]
    LoginMissingProperty,

    /// Login payload carries a non-string field
    #[error("username dan password harus string")]
    LoginTypeMismatch,

    /// No user with that username
    #[error("username tidak ditemukan")]
    UsernameNotFound,

    /// Username exists but no id row came back
    #[error("user tidak ditemukan")]
    UserIdNotFound,

    /// Password does not match the stored hash
    #[error("kredensial yang Anda masukkan salah")]
    WrongCredentials,

    // ------------------------------------------------------------------
    // Refresh token handling (400)
    // ------------------------------------------------------------------
    /// Payload lacks the refreshToken field
    #[error("harus mengirimkan token refresh")]
    MissingRefreshToken,

    /// refreshToken field is not a string
    #[error("refresh token harus string")]
    RefreshTokenTypeMismatch,

    /// Signature verification failed
    #[error("refresh token tidak valid")]
    InvalidRefreshToken,

    /// Token is well formed but was never stored or already revoked
    #[error("refresh token tidak ditemukan di database")]
    RefreshTokenNotRegistered,

    // ------------------------------------------------------------------
    // Infrastructure (500)
    // ------------------------------------------------------------------
    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    PasswordHashing(#[from] platform::password::PasswordHashError),

    /// Token signing failure
    #[error("Token creation error: {0}")]
    TokenCreation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IdentityError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::RegisterUserMissingProperty
            | IdentityError::RegisterUserTypeMismatch
            | IdentityError::UsernameTooLong
            | IdentityError::UsernameRestrictedCharacter
            | IdentityError::UsernameTaken
            | IdentityError::LoginMissingProperty
            | IdentityError::LoginTypeMismatch
            | IdentityError::UsernameNotFound
            | IdentityError::UserIdNotFound
            | IdentityError::MissingRefreshToken
            | IdentityError::RefreshTokenTypeMismatch
            | IdentityError::InvalidRefreshToken
            | IdentityError::RefreshTokenNotRegistered => ErrorKind::BadRequest,

            IdentityError::WrongCredentials => ErrorKind::Unauthorized,

            IdentityError::PasswordHashing(_)
            | IdentityError::TokenCreation(_)
            | IdentityError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            IdentityError::Database(e) => {
                tracing::error!(error = %e, "Identity database error");
            }
            IdentityError::PasswordHashing(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            IdentityError::TokenCreation(e) => {
                tracing::error!(error = %e, "Token creation error");
            }
            IdentityError::WrongCredentials => {
                tracing::warn!("Login rejected, wrong credentials");
            }
            _ => {
                tracing::debug!(error = %self, "Identity error");
            }
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
