//! JWT Token Codec
//!
//! HS256 access/refresh token pairs for stateless request authentication:
//! - Access tokens are short-lived (`exp` claim, validated on decode).
//! - Refresh tokens carry no expiry; they are revoked server-side by
//!   deleting them from storage, so the codec only checks the signature.
//!
//! Access and refresh tokens are signed with separate keys so one can never
//! be presented in place of the other.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature invalid, malformed, or signed with the wrong key
    #[error("token is not valid")]
    Invalid,

    /// Access token past its expiry
    #[error("token has expired")]
    Expired,

    /// Signing failed
    #[error("token creation failed: {0}")]
    CreationFailed(String),
}

/// Claims carried by both token flavors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Owner's user id (`user-…`)
    pub id: String,
    pub username: String,
    /// Present on access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// HS256 codec holding both key pairs and the access-token lifetime.
pub struct TokenCodec {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_token_age: Duration,
}

impl TokenCodec {
    pub fn new(access_key: &[u8], refresh_key: &[u8], access_token_age: Duration) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_key),
            access_decoding: DecodingKey::from_secret(access_key),
            refresh_encoding: EncodingKey::from_secret(refresh_key),
            refresh_decoding: DecodingKey::from_secret(refresh_key),
            access_token_age,
        }
    }

    /// Create an access token expiring `access_token_age` from now.
    pub fn create_access_token(&self, id: &str, username: &str) -> Result<String, TokenError> {
        let claims = TokenClaims {
            id: id.to_owned(),
            username: username.to_owned(),
            exp: Some(Utc::now().timestamp() as u64 + self.access_token_age.as_secs()),
        };
        encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(|e| TokenError::CreationFailed(e.to_string()))
    }

    /// Create a refresh token with no expiry claim.
    pub fn create_refresh_token(&self, id: &str, username: &str) -> Result<String, TokenError> {
        let claims = TokenClaims {
            id: id.to_owned(),
            username: username.to_owned(),
            exp: None,
        };
        encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(|e| TokenError::CreationFailed(e.to_string()))
    }

    /// Verify an access token (signature + expiry) and return its claims.
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<TokenClaims>(token, &self.access_decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// Verify a refresh token (signature only) and return its claims.
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        decode::<TokenClaims>(token, &self.refresh_decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}
