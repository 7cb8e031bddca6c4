//! Logout User Use Case
//!
//! Revokes a refresh token. The token must be registered before it can be
//! deleted; logging out twice with the same token fails the second time.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entity::parse_refresh_token;
use crate::domain::repository::AuthenticationRepository;
use crate::error::IdentityResult;

/// Logout user use case
pub struct LogoutUserUseCase<A>
where
    A: AuthenticationRepository,
{
    auth_repo: Arc<A>,
}

impl<A> LogoutUserUseCase<A>
where
    A: AuthenticationRepository,
{
    pub fn new(auth_repo: Arc<A>) -> Self {
        Self { auth_repo }
    }

    pub async fn execute(&self, payload: &Value) -> IdentityResult<()> {
        let refresh_token = parse_refresh_token(payload)?;

        self.auth_repo
            .check_availability_token(&refresh_token)
            .await?;

        self.auth_repo.delete_token(&refresh_token).await?;

        tracing::info!("Refresh token revoked");

        Ok(())
    }
}
