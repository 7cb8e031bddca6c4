//! Refresh Authentication Use Case
//!
//! Order matters: signature first, then the store. A token with a bad
//! signature is rejected before the database is consulted; a valid
//! signature that was revoked reports the missing registration.

use std::sync::Arc;

use serde_json::Value;

use crate::application::security::AuthenticationTokenManager;
use crate::domain::entity::parse_refresh_token;
use crate::domain::repository::AuthenticationRepository;
use crate::error::IdentityResult;

/// Refresh authentication use case
pub struct RefreshAuthenticationUseCase<A, T>
where
    A: AuthenticationRepository,
    T: AuthenticationTokenManager + ?Sized,
{
    auth_repo: Arc<A>,
    token_manager: Arc<T>,
}

impl<A, T> RefreshAuthenticationUseCase<A, T>
where
    A: AuthenticationRepository,
    T: AuthenticationTokenManager + ?Sized,
{
    pub fn new(auth_repo: Arc<A>, token_manager: Arc<T>) -> Self {
        Self {
            auth_repo,
            token_manager,
        }
    }

    /// Returns a fresh access token.
    pub async fn execute(&self, payload: &Value) -> IdentityResult<String> {
        let refresh_token = parse_refresh_token(payload)?;

        self.token_manager.verify_refresh_token(&refresh_token)?;

        self.auth_repo
            .check_availability_token(&refresh_token)
            .await?;

        let token_payload = self.token_manager.decode_payload(&refresh_token)?;

        let access_token = self.token_manager.create_access_token(&token_payload)?;

        tracing::info!(username = %token_payload.username, "Access token refreshed");

        Ok(access_token)
    }
}
