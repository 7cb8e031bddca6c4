//! Get Thread Detail Use Case
//!
//! Assembles the full public view of a thread: the thread itself, its
//! comments in posting order, and each comment's replies in posting order.
//! Replies are fetched for all comments in one batched query, then grouped
//! back under their parent comment in memory. Deleted comments and replies
//! stay in the listing with their content masked.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entity::{DetailComment, DetailReply, DetailThread};
use crate::domain::repository::{
    CommentRepository, ReplyRecord, ReplyRepository, ThreadRepository,
};
use crate::error::ForumResult;
use kernel::id::ThreadId;

/// Get thread detail use case
pub struct GetThreadDetailUseCase<R, C, T>
where
    R: ReplyRepository,
    C: CommentRepository,
    T: ThreadRepository,
{
    reply_repo: Arc<R>,
    comment_repo: Arc<C>,
    thread_repo: Arc<T>,
}

impl<R, C, T> GetThreadDetailUseCase<R, C, T>
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

    pub async fn execute(&self, thread_id: &ThreadId) -> ForumResult<DetailThread> {
        let thread = self.thread_repo.get_thread_by_id(thread_id).await?;
        let comments = self.comment_repo.get_comments_by_thread_id(thread_id).await?;

        // One batched query covers every comment; skip it entirely when the
        // thread has no comments.
        let mut replies_by_comment: HashMap<String, Vec<ReplyRecord>> = HashMap::new();
        if !comments.is_empty() {
            let comment_ids: Vec<_> = comments.iter().map(|c| c.id.clone()).collect();
            let replies = self.reply_repo.get_replies_by_comment_ids(&comment_ids).await?;
            for reply in replies {
                replies_by_comment
                    .entry(reply.comment_id.as_str().to_owned())
                    .or_default()
                    .push(reply);
            }
        }

        let detail_comments = comments
            .into_iter()
            .map(|comment| {
                let replies = replies_by_comment
                    .remove(comment.id.as_str())
                    .unwrap_or_default()
                    .into_iter()
                    .map(DetailReply::new)
                    .collect();
                DetailComment::new(comment, replies)
            })
            .collect();

        Ok(DetailThread::new(thread, detail_comments))
    }
}
