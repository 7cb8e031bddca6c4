//! Security Service Implementations
//!
//! Argon2id for passwords, HS256 JWTs for tokens, both via the platform
//! crate.

use std::sync::Arc;

use platform::password::{ClearTextPassword, hash_password, verify_password};
use platform::token::TokenCodec;

use crate::application::security::{AuthenticationTokenManager, PasswordHash, TokenPayload};
use crate::error::{IdentityError, IdentityResult};

/// Argon2id-backed password hashing
#[derive(Clone, Default)]
pub struct Argon2PasswordHash;

impl PasswordHash for Argon2PasswordHash {
    fn hash(&self, password: &ClearTextPassword) -> IdentityResult<String> {
        Ok(hash_password(password)?)
    }

    fn compare(&self, password: &ClearTextPassword, encrypted: &str) -> IdentityResult<()> {
        if verify_password(password, encrypted)? {
            Ok(())
        } else {
            Err(IdentityError::WrongCredentials)
        }
    }
}

/// JWT-backed token management
#[derive(Clone)]
pub struct JwtTokenManager {
    codec: Arc<TokenCodec>,
}

impl JwtTokenManager {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> IdentityResult<String> {
        self.codec
            .create_access_token(&payload.id, &payload.username)
            .map_err(|e| IdentityError::TokenCreation(e.to_string()))
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> IdentityResult<String> {
        self.codec
            .create_refresh_token(&payload.id, &payload.username)
            .map_err(|e| IdentityError::TokenCreation(e.to_string()))
    }

    fn verify_refresh_token(&self, token: &str) -> IdentityResult<()> {
        self.codec
            .verify_refresh_token(token)
            .map(|_| ())
            .map_err(|_| IdentityError::InvalidRefreshToken)
    }

    fn decode_payload(&self, token: &str) -> IdentityResult<TokenPayload> {
        let claims = self
            .codec
            .verify_refresh_token(token)
            .map_err(|_| IdentityError::InvalidRefreshToken)?;

        Ok(TokenPayload {
            id: claims.id,
            username: claims.username,
        })
    }
}
