//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{RegisterUser, RegisteredUser};
use crate::error::IdentityResult;
use kernel::id::UserId;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user; `password_hash` is the already-hashed password
    async fn add_user(
        &self,
        register_user: &RegisterUser,
        password_hash: &str,
    ) -> IdentityResult<RegisteredUser>;

    /// Fail with `UsernameTaken` when the username is already registered
    async fn verify_available_username(&self, username: &str) -> IdentityResult<()>;

    /// Stored password hash, or `UsernameNotFound`
    async fn get_password_by_username(&self, username: &str) -> IdentityResult<String>;

    /// User id for the username, or `UserIdNotFound`
    async fn get_id_by_username(&self, username: &str) -> IdentityResult<UserId>;
}

/// Authentication repository trait
///
/// Holds the set of refresh tokens that are currently valid. A token absent
/// from the store is revoked no matter what its signature says.
#[trait_variant::make(AuthenticationRepository: Send)]
pub trait LocalAuthenticationRepository {
    /// Register a freshly issued refresh token
    async fn add_token(&self, token: &str) -> IdentityResult<()>;

    /// Fail with `RefreshTokenNotRegistered` unless the token is stored
    async fn check_availability_token(&self, token: &str) -> IdentityResult<()>;

    /// Revoke a refresh token
    async fn delete_token(&self, token: &str) -> IdentityResult<()>;
}
