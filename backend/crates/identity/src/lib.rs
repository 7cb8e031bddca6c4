//! Identity Backend Module
//!
//! User registration and the authentication lifecycle: login issues an
//! access/refresh token pair, refresh trades a registered refresh token for
//! a new access token, logout revokes the refresh token.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, validation, repository traits
//! - `application/` - Use cases and security service traits
//! - `infra/` - Database and crypto implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Token Model
//! - Access tokens are short-lived JWTs carrying `{id, username, exp}`
//! - Refresh tokens carry no expiry; revocation is a server-side delete
//!   from the authentications table
//! - Passwords are stored as Argon2id PHC strings, never in clear text

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{IdentityError, IdentityResult};
pub use infra::postgres::PgIdentityRepository;
pub use infra::security::{Argon2PasswordHash, JwtTokenManager};
pub use presentation::router::{identity_router, identity_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

pub mod entities {
    pub use crate::domain::entity::*;
}

#[cfg(test)]
mod tests;
