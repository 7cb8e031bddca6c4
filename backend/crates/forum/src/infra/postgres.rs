//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entity::{
    AddedComment, AddedReply, AddedThread, NewComment, NewReply, NewThread,
};
use crate::domain::repository::{
    CommentRecord, CommentRepository, ReplyRecord, ReplyRepository, ThreadRecord,
    ThreadRepository,
};
use crate::error::{ForumError, ForumResult};
use kernel::id::{CommentId, ReplyId, ThreadId, UserId};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgForumRepository {
    pool: PgPool,
}

impl PgForumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ThreadRepository for PgForumRepository {
    async fn add_thread(
        &self,
        new_thread: &NewThread,
        owner_id: &UserId,
    ) -> ForumResult<AddedThread> {
        let id = ThreadId::generate();

        let row = sqlx::query_as::<_, AddedRow>(
            r#"
            INSERT INTO threads (id, title, body, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title AS content, user_id AS owner
            "#,
        )
        .bind(id.as_str())
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(owner_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(thread_id = %row.id, owner = %row.owner, "Thread created");

        Ok(AddedThread {
            id: row.id.into(),
            title: row.content,
            owner: row.owner.into(),
        })
    }

    async fn verify_available_thread(&self, thread_id: &ThreadId) -> ForumResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)",
        )
        .bind(thread_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        if exists {
            Ok(())
        } else {
            Err(ForumError::ThreadNotFound)
        }
    }

    async fn get_thread_by_id(&self, thread_id: &ThreadId) -> ForumResult<ThreadRecord> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT threads.id, threads.title, threads.body, threads.date, users.username
            FROM threads
            LEFT JOIN users ON threads.user_id = users.id
            WHERE threads.id = $1
            "#,
        )
        .bind(thread_id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ForumError::ThreadNotFound)?;

        Ok(row.into_record())
    }
}

impl CommentRepository for PgForumRepository {
    async fn add_comment(
        &self,
        new_comment: &NewComment,
        owner_id: &UserId,
        thread_id: &ThreadId,
    ) -> ForumResult<AddedComment> {
        let id = CommentId::generate();

        let row = sqlx::query_as::<_, AddedRow>(
            r#"
            INSERT INTO comments (id, content, user_id, thread_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, user_id AS owner
            "#,
        )
        .bind(id.as_str())
        .bind(&new_comment.content)
        .bind(owner_id.as_str())
        .bind(thread_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(comment_id = %row.id, thread_id = %thread_id, "Comment created");

        Ok(AddedComment {
            id: row.id.into(),
            content: row.content,
            owner: row.owner.into(),
        })
    }

    async fn verify_available_comment_in_thread(
        &self,
        comment_id: &CommentId,
        thread_id: &ThreadId,
    ) -> ForumResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM comments
                WHERE id = $1 AND thread_id = $2 AND is_delete = FALSE
            )
            "#,
        )
        .bind(comment_id.as_str())
        .bind(thread_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        if exists {
            Ok(())
        } else {
            Err(ForumError::CommentNotInThread)
        }
    }

    async fn verify_comment_owner(
        &self,
        comment_id: &CommentId,
        owner_id: &UserId,
    ) -> ForumResult<()> {
        let user_id = sqlx::query_scalar::<_, String>(
            "SELECT user_id FROM comments WHERE id = $1",
        )
        .bind(comment_id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ForumError::CommentNotFound)?;

        if user_id == owner_id.as_str() {
            Ok(())
        } else {
            Err(ForumError::CommentOwnershipForbidden)
        }
    }

    async fn delete_comment_by_id(&self, comment_id: &CommentId) -> ForumResult<()> {
        let affected = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(ForumError::CommentDeleteTargetMissing);
        }

        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> ForumResult<Vec<CommentRecord>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comments.id, users.username, comments.date, comments.content,
                   comments.is_delete
            FROM comments
            LEFT JOIN users ON comments.user_id = users.id
            WHERE comments.thread_id = $1
            ORDER BY comments.date ASC
            "#,
        )
        .bind(thread_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_record).collect())
    }
}

impl ReplyRepository for PgForumRepository {
    async fn add_reply(
        &self,
        new_reply: &NewReply,
        owner_id: &UserId,
        comment_id: &CommentId,
        thread_id: &ThreadId,
    ) -> ForumResult<AddedReply> {
        let id = ReplyId::generate();

        let row = sqlx::query_as::<_, AddedRow>(
            r#"
            INSERT INTO comment_replies (id, content, user_id, comment_id, thread_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, content, user_id AS owner
            "#,
        )
        .bind(id.as_str())
        .bind(&new_reply.content)
        .bind(owner_id.as_str())
        .bind(comment_id.as_str())
        .bind(thread_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            reply_id = %row.id,
            comment_id = %comment_id,
            thread_id = %thread_id,
            "Reply created"
        );

        Ok(AddedReply {
            id: row.id.into(),
            content: row.content,
            owner: row.owner.into(),
        })
    }

    async fn verify_available_reply_in_comment(
        &self,
        reply_id: &ReplyId,
        comment_id: &CommentId,
    ) -> ForumResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM comment_replies
                WHERE id = $1 AND comment_id = $2 AND is_delete = FALSE
            )
            "#,
        )
        .bind(reply_id.as_str())
        .bind(comment_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        if exists {
            Ok(())
        } else {
            Err(ForumError::ReplyNotInComment)
        }
    }

    async fn verify_reply_owner(&self, reply_id: &ReplyId, owner_id: &UserId) -> ForumResult<()> {
        let user_id = sqlx::query_scalar::<_, String>(
            "SELECT user_id FROM comment_replies WHERE id = $1",
        )
        .bind(reply_id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ForumError::ReplyNotFound)?;

        if user_id == owner_id.as_str() {
            Ok(())
        } else {
            Err(ForumError::ReplyOwnershipForbidden)
        }
    }

    async fn delete_reply_by_id(&self, reply_id: &ReplyId) -> ForumResult<()> {
        let affected = sqlx::query("UPDATE comment_replies SET is_delete = TRUE WHERE id = $1")
            .bind(reply_id.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(ForumError::ReplyDeleteTargetMissing);
        }

        Ok(())
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> ForumResult<Vec<ReplyRecord>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = comment_ids.iter().map(|id| id.as_str().to_owned()).collect();

        let rows = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT comment_replies.id, comment_replies.comment_id, users.username,
                   comment_replies.date, comment_replies.content, comment_replies.is_delete
            FROM comment_replies
            LEFT JOIN users ON comment_replies.user_id = users.id
            WHERE comment_replies.comment_id = ANY($1)
            ORDER BY comment_replies.date ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ReplyRow::into_record).collect())
    }
}

// Internal row types for sqlx mapping

/// INSERT .. RETURNING shape shared by threads, comments and replies.
/// Thread inserts alias `title` to `content` so the same row fits.
#[derive(sqlx::FromRow)]
struct AddedRow {
    id: String,
    content: String,
    owner: String,
}

#[derive(sqlx::FromRow)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    date: chrono::DateTime<chrono::Utc>,
    username: String,
}

impl ThreadRow {
    fn into_record(self) -> ThreadRecord {
        ThreadRecord {
            id: self.id.into(),
            title: self.title,
            body: self.body,
            date: self.date,
            username: self.username,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: String,
    username: String,
    date: chrono::DateTime<chrono::Utc>,
    content: String,
    is_delete: bool,
}

impl CommentRow {
    fn into_record(self) -> CommentRecord {
        CommentRecord {
            id: self.id.into(),
            username: self.username,
            date: self.date,
            content: self.content,
            is_delete: self.is_delete,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReplyRow {
    id: String,
    comment_id: String,
    username: String,
    date: chrono::DateTime<chrono::Utc>,
    content: String,
    is_delete: bool,
}

impl ReplyRow {
    fn into_record(self) -> ReplyRecord {
        ReplyRecord {
            id: self.id.into(),
            comment_id: self.comment_id.into(),
            username: self.username,
            date: self.date,
            content: self.content,
            is_delete: self.is_delete,
        }
    }
}
