//! Forum Backend Module
//!
//! Threads, comments on threads, and replies on comments.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, validation, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Deletion Model
//! - Comments and replies are soft-deleted: the row keeps its place in the
//!   thread and the content is masked in every read after that
//! - Only the owner may delete; a wrong owner is a 403, a missing target a 404
//! - Availability checks always run parent-first: thread, then comment,
//!   then reply

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ForumError, ForumResult};
pub use infra::postgres::PgForumRepository;
pub use presentation::router::{forum_router, forum_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

pub mod entities {
    pub use crate::domain::entity::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
