//! Reply entities

use chrono::{DateTime, Utc};
use kernel::id::{ReplyId, UserId};
use serde::Serialize;
use serde_json::Value;

use super::{LooseField, string_field};
use crate::domain::repository::ReplyRecord;
use crate::error::{ForumError, ForumResult};

/// Content shown in place of a soft-deleted reply.
pub const DELETED_REPLY_MASK: &str = "**balasan telah dihapus**";

/// Validated payload for creating a reply.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReply {
    pub content: String,
}

impl NewReply {
    pub fn parse(payload: &Value) -> ForumResult<Self> {
        match string_field(payload, "content") {
            LooseField::Missing => Err(ForumError::NewReplyMissingProperty),
            LooseField::WrongType => Err(ForumError::NewReplyTypeMismatch),
            LooseField::Text(content) => Ok(Self { content }),
        }
    }
}

/// Reply as acknowledged right after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddedReply {
    pub id: ReplyId,
    pub content: String,
    pub owner: UserId,
}

/// Reply view inside a comment, masked at construction when soft-deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailReply {
    pub id: ReplyId,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl DetailReply {
    pub fn new(record: ReplyRecord) -> Self {
        let content = if record.is_delete {
            DELETED_REPLY_MASK.to_string()
        } else {
            record.content
        };
        Self {
            id: record.id,
            content,
            date: record.date,
            username: record.username,
        }
    }
}
