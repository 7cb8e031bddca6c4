//! Comment entities

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, UserId};
use serde::Serialize;
use serde_json::Value;

use super::reply::DetailReply;
use super::{LooseField, string_field};
use crate::domain::repository::CommentRecord;
use crate::error::{ForumError, ForumResult};

/// Content shown in place of a soft-deleted comment.
pub const DELETED_COMMENT_MASK: &str = "**komentar telah dihapus**";

/// Validated payload for creating a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub content: String,
}

impl NewComment {
    /// Parse and validate a loose payload: `content` must be present, then
    /// must be a string.
    pub fn parse(payload: &Value) -> ForumResult<Self> {
        match string_field(payload, "content") {
            LooseField::Missing => Err(ForumError::NewCommentMissingProperty),
            LooseField::WrongType => Err(ForumError::NewCommentTypeMismatch),
            LooseField::Text(content) => Ok(Self { content }),
        }
    }
}

/// Comment as acknowledged right after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddedComment {
    pub id: CommentId,
    pub content: String,
    pub owner: UserId,
}

/// Comment view inside a thread detail, with its ordered replies.
///
/// Masking is applied here, at construction: once built from a soft-deleted
/// row the original content is gone from the value. The deleted flag itself
/// is not stored; it is re-read from the row on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailComment {
    pub id: CommentId,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    /// Always present; a comment without replies carries an empty list.
    pub replies: Vec<DetailReply>,
}

impl DetailComment {
    pub fn new(record: CommentRecord, replies: Vec<DetailReply>) -> Self {
        let content = if record.is_delete {
            DELETED_COMMENT_MASK.to_string()
        } else {
            record.content
        };
        Self {
            id: record.id,
            username: record.username,
            date: record.date,
            content,
            replies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(content: &str, is_delete: bool) -> CommentRecord {
        CommentRecord {
            id: "comment-123".into(),
            username: "dicoding".to_string(),
            date: Utc::now(),
            content: content.to_string(),
            is_delete,
        }
    }

    #[test]
    fn test_parse_valid_payload() {
        let payload = json!({ "content": "sebuah komentar" });
        assert_eq!(
            NewComment::parse(&payload).unwrap().content,
            "sebuah komentar"
        );
    }

    #[test]
    fn test_parse_rejects_missing_content() {
        for payload in [json!({}), json!({ "content": "" }), json!({ "content": null })] {
            assert!(matches!(
                NewComment::parse(&payload),
                Err(ForumError::NewCommentMissingProperty)
            ));
        }
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        for payload in [json!({ "content": 123 }), json!({ "content": {} })] {
            assert!(matches!(
                NewComment::parse(&payload),
                Err(ForumError::NewCommentTypeMismatch)
            ));
        }
    }

    #[test]
    fn test_live_comment_keeps_content() {
        let detail = DetailComment::new(record("sebuah komentar", false), vec![]);
        assert_eq!(detail.content, "sebuah komentar");
        assert!(detail.replies.is_empty());
    }

    #[test]
    fn test_deleted_comment_is_masked() {
        let detail = DetailComment::new(record("isi asli apapun", true), vec![]);
        assert_eq!(detail.content, DELETED_COMMENT_MASK);
        assert_eq!(detail.content, "**komentar telah dihapus**");
    }
}
