//! Application Layer
//!
//! Use cases orchestrating entity validation and repository calls. The
//! verification order inside each use case is part of the contract: every
//! step gates the next, and the first failure propagates untouched.

pub mod add_comment;
pub mod add_reply;
pub mod add_thread;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_thread_detail;

// Re-exports
pub use add_comment::AddCommentUseCase;
pub use add_reply::AddReplyUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use delete_reply::DeleteReplyUseCase;
pub use get_thread_detail::GetThreadDetailUseCase;
