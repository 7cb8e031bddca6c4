//! Add Comment Use Case
//!
//! The thread availability check runs before the repository write so an
//! orphan comment can never be created.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entity::{AddedComment, NewComment};
use crate::domain::repository::{CommentRepository, ThreadRepository};
use crate::error::ForumResult;
use kernel::id::{ThreadId, UserId};

/// Add comment use case
pub struct AddCommentUseCase<C, T>
where
    C: CommentRepository,
    T: ThreadRepository,
{
    comment_repo: Arc<C>,
    thread_repo: Arc<T>,
}

impl<C, T> AddCommentUseCase<C, T>
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
        payload: &Value,
        owner_id: &UserId,
        thread_id: &ThreadId,
    ) -> ForumResult<AddedComment> {
        // 1. The target thread must exist
        self.thread_repo.verify_available_thread(thread_id).await?;

        // 2. Validate the comment payload
        let new_comment = NewComment::parse(payload)?;

        // 3. Persist
        let added_comment = self
            .comment_repo
            .add_comment(&new_comment, owner_id, thread_id)
            .await?;

        tracing::info!(
            comment_id = %added_comment.id,
            thread_id = %thread_id,
            owner = %added_comment.owner,
            "Comment created"
        );

        Ok(added_comment)
    }
}
