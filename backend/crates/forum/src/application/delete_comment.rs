//! Delete Comment Use Case
//!
//! Strict order: thread exists, comment available in that thread, actor
//! owns the comment, then the soft delete. The ownership step fires a
//! Forbidden error, not NotFound, when the comment belongs to someone else.

use std::sync::Arc;

use crate::domain::repository::{CommentRepository, ThreadRepository};
use crate::error::ForumResult;
use kernel::id::{CommentId, ThreadId, UserId};

/// Delete comment use case
pub struct DeleteCommentUseCase<C, T>
where
    C: CommentRepository,
    T: ThreadRepository,
{
    comment_repo: Arc<C>,
    thread_repo: Arc<T>,
}

impl<C, T> DeleteCommentUseCase<C, T>
where
    C: CommentRepository,
    T: ThreadRepository,
{
    pub fn new(comment_repo: Arc<C>, thread_repo: Arc<T>) -> Self {
        Self {
            comment_repo,
            thread_repo,
        }
    }

    pub async fn execute(
        &self,
        thread_id: &ThreadId,
        comment_id: &CommentId,
        owner_id: &UserId,
    ) -> ForumResult<()> {
        // 1. The thread must exist
        self.thread_repo.verify_available_thread(thread_id).await?;

        // 2. The comment must live in that thread and not be deleted already
        self.comment_repo
            .verify_available_comment_in_thread(comment_id, thread_id)
            .await?;

        // 3. Only the owner may delete
        self.comment_repo
            .verify_comment_owner(comment_id, owner_id)
            .await?;

        // 4. Soft delete
        self.comment_repo.delete_comment_by_id(comment_id).await?;

        tracing::info!(
            comment_id = %comment_id,
            thread_id = %thread_id,
            owner = %owner_id,
            "Comment soft-deleted"
        );

        Ok(())
    }
}
