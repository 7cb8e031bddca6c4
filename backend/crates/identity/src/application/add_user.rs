//! Add User Use Case
//!
//! Validates the payload, claims the username, hashes the password, and
//! persists. The availability check runs before hashing so a taken username
//! costs no Argon2 work.

use std::sync::Arc;

use serde_json::Value;

use crate::application::security::PasswordHash;
use crate::domain::entity::{RegisterUser, RegisteredUser};
use crate::domain::repository::UserRepository;
use crate::error::IdentityResult;

/// Add user use case
pub struct AddUserUseCase<U, P>
where
    U: UserRepository,
    P: PasswordHash + ?Sized,
{
    user_repo: Arc<U>,
    password_hash: Arc<P>,
}

impl<U, P> AddUserUseCase<U, P>
where
    U: UserRepository,
    P: PasswordHash + ?Sized,
{
    pub fn new(user_repo: Arc<U>, password_hash: Arc<P>) -> Self {
        Self {
            user_repo,
            password_hash,
        }
    }

    pub async fn execute(&self, payload: &Value) -> IdentityResult<RegisteredUser> {
        let register_user = RegisterUser::parse(payload)?;

        self.user_repo
            .verify_available_username(&register_user.username)
            .await?;

        let hash = self.password_hash.hash(&register_user.password)?;

        let registered = self.user_repo.add_user(&register_user, &hash).await?;

        tracing::info!(
            user_id = %registered.id,
            username = %registered.username,
            "User registered"
        );

        Ok(registered)
    }
}
