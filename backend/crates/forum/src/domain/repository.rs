//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! "Available" throughout means: the row exists, is not soft-deleted, and
//! belongs to the parent named in the call.

use chrono::{DateTime, Utc};

use crate::domain::entity::{
    AddedComment, AddedReply, AddedThread, NewComment, NewReply, NewThread,
};
use crate::error::ForumResult;
use kernel::id::{CommentId, ReplyId, ThreadId, UserId};

// ============================================================================
// Raw row projections
// ============================================================================

/// Thread row joined with its author's username.
#[derive(Debug, Clone)]
pub struct ThreadRecord {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// Comment row joined with its author's username, delete flag included.
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub id: CommentId,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

/// Reply row joined with its author's username, delete flag included.
#[derive(Debug, Clone)]
pub struct ReplyRecord {
    pub id: ReplyId,
    pub comment_id: CommentId,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

// ============================================================================
// Repository traits
// ============================================================================

/// Thread repository trait
#[trait_variant::make(ThreadRepository: Send)]
pub trait LocalThreadRepository {
    /// Persist a new thread owned by `owner_id`
    async fn add_thread(
        &self,
        new_thread: &NewThread,
        owner_id: &UserId,
    ) -> ForumResult<AddedThread>;

    /// Fail with `ThreadNotFound` unless the thread exists
    async fn verify_available_thread(&self, thread_id: &ThreadId) -> ForumResult<()>;

    /// Fetch a thread row with its author's username
    async fn get_thread_by_id(&self, thread_id: &ThreadId) -> ForumResult<ThreadRecord>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Persist a new comment under `thread_id`, owned by `owner_id`
    async fn add_comment(
        &self,
        new_comment: &NewComment,
        owner_id: &UserId,
        thread_id: &ThreadId,
    ) -> ForumResult<AddedComment>;

    /// Fail with `CommentNotInThread` unless the comment exists in the
    /// thread and is not soft-deleted
    async fn verify_available_comment_in_thread(
        &self,
        comment_id: &CommentId,
        thread_id: &ThreadId,
    ) -> ForumResult<()>;

    /// Fail with `CommentNotFound` if absent, `CommentOwnershipForbidden`
    /// if owned by someone else
    async fn verify_comment_owner(
        &self,
        comment_id: &CommentId,
        owner_id: &UserId,
    ) -> ForumResult<()>;

    /// Soft-delete: set the delete flag, keep the row
    async fn delete_comment_by_id(&self, comment_id: &CommentId) -> ForumResult<()>;

    /// All comments of a thread in ascending chronological order,
    /// soft-deleted ones included
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> ForumResult<Vec<CommentRecord>>;
}

/// Reply repository trait
#[trait_variant::make(ReplyRepository: Send)]
pub trait LocalReplyRepository {
    /// Persist a new reply under `comment_id` (within `thread_id`)
    async fn add_reply(
        &self,
        new_reply: &NewReply,
        owner_id: &UserId,
        comment_id: &CommentId,
        thread_id: &ThreadId,
    ) -> ForumResult<AddedReply>;

    /// Fail with `ReplyNotInComment` unless the reply exists in the comment
    /// and is not soft-deleted
    async fn verify_available_reply_in_comment(
        &self,
        reply_id: &ReplyId,
        comment_id: &CommentId,
    ) -> ForumResult<()>;

    /// Fail with `ReplyNotFound` if absent, `ReplyOwnershipForbidden` if
    /// owned by someone else
    async fn verify_reply_owner(&self, reply_id: &ReplyId, owner_id: &UserId) -> ForumResult<()>;

    /// Soft-delete: set the delete flag, keep the row
    async fn delete_reply_by_id(&self, reply_id: &ReplyId) -> ForumResult<()>;

    /// All replies of the given comments in one batched query, ascending
    /// chronological order. An empty id list returns empty without querying.
    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> ForumResult<Vec<ReplyRecord>>;
}
