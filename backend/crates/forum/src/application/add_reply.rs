//! Add Reply Use Case
//!
//! Strict order: thread exists, comment available in that thread, then
//! payload validation, then the write. A failed step stops everything after
//! it.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entity::{AddedReply, NewReply};
use crate::domain::repository::{CommentRepository, ReplyRepository, ThreadRepository};
use crate::error::ForumResult;
use kernel::id::{CommentId, ThreadId, UserId};

/// Add reply use case
pub struct AddReplyUseCase<R, C, T>
where
    R: ReplyRepository,
    C: CommentRepository,
    T: ThreadRepository,
{
    reply_repo: Arc<R>,
    comment_repo: Arc<C>,
    thread_repo: Arc<T>,
}

impl<R, C, T> AddReplyUseCase<R, C, T>
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
        payload: &Value,
        owner_id: &UserId,
        thread_id: &ThreadId,
        comment_id: &CommentId,
    ) -> ForumResult<AddedReply> {
        // 1. The thread must exist
        self.thread_repo.verify_available_thread(thread_id).await?;

        // 2. The comment must live in that thread and not be deleted
        self.comment_repo
            .verify_available_comment_in_thread(comment_id, thread_id)
            .await?;

        // 3. Validate the reply payload
        let new_reply = NewReply::parse(payload)?;

        // 4. Persist
        let added_reply = self
            .reply_repo
            .add_reply(&new_reply, owner_id, comment_id, thread_id)
            .await?;

        tracing::info!(
            reply_id = %added_reply.id,
            comment_id = %comment_id,
            thread_id = %thread_id,
            owner = %added_reply.owner,
            "Reply created"
        );

        Ok(added_reply)
    }
}
