//! Forum Error Types
//!
//! This module provides forum-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Forum-specific result type alias
pub type ForumResult<T> = Result<T, ForumError>;

/// Forum-specific error variants
///
/// The `#[error]` strings double as the user-facing messages; anything that
/// maps to a 5xx is replaced by a generic body at the boundary.
#[derive(Debug, Error)]
pub enum ForumError {
    // ------------------------------------------------------------------
    // Payload validation (400)
    // ------------------------------------------------------------------
    /// New thread payload lacks title or body
    #[error("tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada")]
    NewThreadMissingProperty,

    /// New thread payload carries a non-string title or body
    #[error("tidak dapat membuat thread baru karena tipe data tidak sesuai")]
    NewThreadTypeMismatch,

    /// Thread title longer than 50 characters
    #[error("tidak dapat membuat thread baru karena karakter title melebihi batas limit")]
    NewThreadTitleTooLong,

    /// New comment payload lacks content
    #[error("tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada")]
    NewCommentMissingProperty,

    /// New comment payload carries non-string content
    #[error("tidak dapat membuat comment baru karena tipe data tidak sesuai")]
    NewCommentTypeMismatch,

    /// New reply payload lacks content
    #[error("tidak dapat membuat balasan baru karena properti yang dibutuhkan tidak ada")]
    NewReplyMissingProperty,

    /// New reply payload carries non-string content
    #[error("tidak dapat membuat balasan baru karena tipe data tidak sesuai")]
    NewReplyTypeMismatch,

    // ------------------------------------------------------------------
    // Availability (404)
    // ------------------------------------------------------------------
    /// Thread does not exist
    #[error("thread tidak ditemukan")]
    ThreadNotFound,

    /// Comment does not exist at all
    #[error("komentar tidak ditemukan")]
    CommentNotFound,

    /// Comment missing from the claimed thread, or soft-deleted
    #[error("komentar tidak ditemukan di thread ini atau sudah dihapus")]
    CommentNotInThread,

    /// Delete targeted a comment id that matched no row
    #[error("komentar gagal dihapus. Id tidak ditemukan")]
    CommentDeleteTargetMissing,

    /// Reply does not exist at all
    #[error("balasan tidak ditemukan")]
    ReplyNotFound,

    /// Reply missing from the claimed comment, or soft-deleted
    #[error("balasan tidak ditemukan di komentar ini atau sudah dihapus")]
    ReplyNotInComment,

    /// Delete targeted a reply id that matched no row
    #[error("balasan gagal dihapus. Id tidak ditemukan")]
    ReplyDeleteTargetMissing,

    // ------------------------------------------------------------------
    // Ownership (403)
    // ------------------------------------------------------------------
    /// Actor does not own the comment
    #[error("anda tidak berhak mengakses resource ini")]
    CommentOwnershipForbidden,

    /// Actor does not own the reply
    #[error("anda tidak berhak mengakses resource ini (balasan)")]
    ReplyOwnershipForbidden,

    // ------------------------------------------------------------------
    // Infrastructure (500)
    // ------------------------------------------------------------------
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ForumError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForumError::NewThreadMissingProperty
            | ForumError::NewThreadTypeMismatch
            | ForumError::NewThreadTitleTooLong
            | ForumError::NewCommentMissingProperty
            | ForumError::NewCommentTypeMismatch
            | ForumError::NewReplyMissingProperty
            | ForumError::NewReplyTypeMismatch => ErrorKind::BadRequest,

            ForumError::ThreadNotFound
            | ForumError::CommentNotFound
            | ForumError::CommentNotInThread
            | ForumError::CommentDeleteTargetMissing
            | ForumError::ReplyNotFound
            | ForumError::ReplyNotInComment
            | ForumError::ReplyDeleteTargetMissing => ErrorKind::NotFound,

            ForumError::CommentOwnershipForbidden | ForumError::ReplyOwnershipForbidden => {
                ErrorKind::Forbidden
            }

            ForumError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ForumError::Database(e) => {
                tracing::error!(error = %e, "Forum database error");
            }
            ForumError::CommentOwnershipForbidden | ForumError::ReplyOwnershipForbidden => {
                tracing::warn!(error = %self, "Ownership check rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Forum error");
            }
        }
    }
}

impl IntoResponse for ForumError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
