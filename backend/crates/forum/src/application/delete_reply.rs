//! Delete Reply Use Case
//!
//! Same discipline as deleting a comment, one level deeper. Five steps:
//! thread, comment in thread, reply in comment, ownership, soft delete.
//! The checks and the update are separate round trips, not a transaction;
//! a concurrent double-delete resolves as NotFound for whoever loses.

use std::sync::Arc;

use crate::domain::repository::{CommentRepository, ReplyRepository, ThreadRepository};
use crate::error::ForumResult;
use kernel::id::{CommentId, ReplyId, ThreadId, UserId};

/// Delete reply use case
pub struct DeleteReplyUseCase<R, C, T>
where
    R: ReplyRepository,
    C: CommentRepository,
    T: ThreadRepository,
{
    reply_repo: Arc<R>,
    comment_repo: Arc<C>,
    thread_repo: Arc<T>,
}

impl<R, C, T> DeleteReplyUseCase<R, C, T>
where
    R: ReplyRepository,
    C: CommentRepository,
    T: ThreadRepository,
{
    pub fn new(reply_repo: Arc<R>, comment_repo: Arc<C>, thread_repo: Arc<T>) -> Self {
        Self {
            reply_repo,
            comment_repo,
            thread_repo,
        }
    }

    pub async fn execute(
        &self,
        thread_id: &ThreadId,
        comment_id: &CommentId,
        reply_id: &ReplyId,
        owner_id: &UserId,
    ) -> ForumResult<()> {
        // 1. The thread must exist
        self.thread_repo.verify_available_thread(thread_id).await?;

        // 2. The comment must live in that thread and not be deleted
        self.comment_repo
            .verify_available_comment_in_thread(comment_id, thread_id)
            .await?;

        // 3. The reply must live in that comment and not be deleted already
        self.reply_repo
            .verify_available_reply_in_comment(reply_id, comment_id)
            .await?;

        // 4. Only the owner may delete
        self.reply_repo.verify_reply_owner(reply_id, owner_id).await?;

        // 5. Soft delete
        self.reply_repo.delete_reply_by_id(reply_id).await?;

        tracing::info!(
            reply_id = %reply_id,
            comment_id = %comment_id,
            thread_id = %thread_id,
            owner = %owner_id,
            "Reply soft-deleted"
        );

        Ok(())
    }
}
