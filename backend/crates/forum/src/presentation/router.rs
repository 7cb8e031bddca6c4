//! Forum Router
//!
//! Thread reading is public; everything that writes requires a verified
//! access token.

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use platform::token::TokenCodec;

use crate::domain::repository::{CommentRepository, ReplyRepository, ThreadRepository};
use crate::infra::postgres::PgForumRepository;
use crate::presentation::handlers::{self, ForumAppState};
use crate::presentation::middleware::{AccessTokenState, require_access_token};

/// Create the forum router with PostgreSQL repository
pub fn forum_router(repo: PgForumRepository, codec: Arc<TokenCodec>) -> Router {
    forum_router_generic(repo, codec)
}

/// Create a generic forum router for any repository implementation
pub fn forum_router_generic<R>(repo: R, codec: Arc<TokenCodec>) -> Router
where
    R: ThreadRepository + CommentRepository + ReplyRepository + Clone + Send + Sync + 'static,
{
    let state = ForumAppState {
        repo: Arc::new(repo),
    };

    let token_state = AccessTokenState { codec };

    let protected = Router::new()
        .route("/threads", post(handlers::post_thread::<R>))
        .route(
            "/threads/{thread_id}/comments",
            post(handlers::post_comment::<R>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::delete_comment::<R>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(handlers::post_reply::<R>),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(handlers::delete_reply::<R>),
        )
        .layer(middleware::from_fn(move |req, next| {
            require_access_token(token_state.clone(), req, next)
        }));

    let public = Router::new().route("/threads/{thread_id}", get(handlers::get_thread::<R>));

    Router::new().merge(protected).merge(public).with_state(state)
}
