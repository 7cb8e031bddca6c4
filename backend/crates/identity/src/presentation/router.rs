//! Identity Router
//!
//! Registration and the authentication lifecycle. None of these routes sit
//! behind the access token middleware; they are how tokens come to exist.

use std::sync::Arc;

use axum::{Router, routing::post};
use platform::token::TokenCodec;

use crate::application::security::{AuthenticationTokenManager, PasswordHash};
use crate::domain::repository::{AuthenticationRepository, UserRepository};
use crate::infra::postgres::PgIdentityRepository;
use crate::infra::security::{Argon2PasswordHash, JwtTokenManager};
use crate::presentation::handlers::{self, IdentityAppState};

/// Create the identity router with PostgreSQL repository and the default
/// security stack
pub fn identity_router(repo: PgIdentityRepository, codec: Arc<TokenCodec>) -> Router {
    identity_router_generic(
        repo,
        Arc::new(Argon2PasswordHash),
        Arc::new(JwtTokenManager::new(codec)),
    )
}

/// Create a generic identity router for any repository and security
/// implementations
pub fn identity_router_generic<R>(
    repo: R,
    password_hash: Arc<dyn PasswordHash>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
) -> Router
where
    R: UserRepository + AuthenticationRepository + Clone + Send + Sync + 'static,
{
    let state = IdentityAppState {
        repo: Arc::new(repo),
        password_hash,
        token_manager,
    };

    Router::new()
        .route("/users", post(handlers::post_user::<R>))
        .route(
            "/authentications",
            post(handlers::post_authentication::<R>)
                .put(handlers::put_authentication::<R>)
                .delete(handlers::delete_authentication::<R>),
        )
        .with_state(state)
}
