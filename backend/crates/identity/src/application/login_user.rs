//! Login User Use Case
//!
//! Credential check, then token issuance. The refresh token is stored
//! before the pair is returned, so a token the client holds is always one
//! the server will honor.

use std::sync::Arc;

use serde_json::Value;

use crate::application::security::{AuthenticationTokenManager, PasswordHash, TokenPayload};
use crate::domain::entity::{NewAuth, UserLogin};
use crate::domain::repository::{AuthenticationRepository, UserRepository};
use crate::error::IdentityResult;

/// Login user use case
pub struct LoginUserUseCase<U, A, T, P>
where
    U: UserRepository,
    A: AuthenticationRepository,
    T: AuthenticationTokenManager + ?Sized,
    P: PasswordHash + ?Sized,
{
    user_repo: Arc<U>,
    auth_repo: Arc<A>,
    token_manager: Arc<T>,
    password_hash: Arc<P>,
}

impl<U, A, T, P> LoginUserUseCase<U, A, T, P>
where
    U: UserRepository,
    A: AuthenticationRepository,
    T: AuthenticationTokenManager + ?Sized,
    P: PasswordHash + ?Sized,
{
    pub fn new(
        user_repo: Arc<U>,
        auth_repo: Arc<A>,
        token_manager: Arc<T>,
        password_hash: Arc<P>,
    ) -> Self {
        Self {
            user_repo,
            auth_repo,
            token_manager,
            password_hash,
        }
    }

    pub async fn execute(&self, payload: &Value) -> IdentityResult<NewAuth> {
        let login = UserLogin::parse(payload)?;

        // An unknown username reports as such; only a wrong password for an
        // existing user is a credentials failure
        let encrypted = self
            .user_repo
            .get_password_by_username(&login.username)
            .await?;

        self.password_hash.compare(&login.password, &encrypted)?;

        let id = self.user_repo.get_id_by_username(&login.username).await?;

        let token_payload = TokenPayload {
            id: id.as_str().to_owned(),
            username: login.username.clone(),
        };

        let access_token = self.token_manager.create_access_token(&token_payload)?;
        let refresh_token = self.token_manager.create_refresh_token(&token_payload)?;

        self.auth_repo.add_token(&refresh_token).await?;

        tracing::info!(user_id = %id, username = %login.username, "User logged in");

        Ok(NewAuth {
            access_token,
            refresh_token,
        })
    }
}
