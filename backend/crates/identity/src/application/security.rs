//! Security Service Traits
//!
//! Seams between the use cases and the concrete crypto. Both operations are
//! CPU-bound, so the traits are synchronous; the async boundary stays in
//! the repositories.

use platform::password::ClearTextPassword;

use crate::error::IdentityResult;

/// Password hashing service
pub trait PasswordHash: Send + Sync {
    fn hash(&self, password: &ClearTextPassword) -> IdentityResult<String>;

    /// Fail with `WrongCredentials` when the password does not match
    fn compare(&self, password: &ClearTextPassword, encrypted: &str) -> IdentityResult<()>;
}

/// Identity carried inside both token flavors.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPayload {
    pub id: String,
    pub username: String,
}

/// Token issuing and verification service
pub trait AuthenticationTokenManager: Send + Sync {
    fn create_access_token(&self, payload: &TokenPayload) -> IdentityResult<String>;

    fn create_refresh_token(&self, payload: &TokenPayload) -> IdentityResult<String>;

    /// Fail with `InvalidRefreshToken` on a bad signature or malformed token
    fn verify_refresh_token(&self, token: &str) -> IdentityResult<()>;

    /// Claims of an already-verified refresh token
    fn decode_payload(&self, token: &str) -> IdentityResult<TokenPayload>;
}
