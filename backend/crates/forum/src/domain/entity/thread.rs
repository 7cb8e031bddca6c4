//! Thread entities

use chrono::{DateTime, Utc};
use kernel::id::{ThreadId, UserId};
use serde::Serialize;
use serde_json::Value;

use super::comment::DetailComment;
use super::{LooseField, string_field};
use crate::domain::repository::ThreadRecord;
use crate::error::{ForumError, ForumResult};

/// Maximum thread title length, in characters.
pub const TITLE_CHAR_LIMIT: usize = 50;

/// Validated payload for creating a thread.
#[derive(Debug, Clone, PartialEq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
}

impl NewThread {
    /// Parse and validate a loose payload.
    ///
    /// Checks run in order: presence of both fields, then type, then the
    /// title length limit. Each phase inspects every field before the next
    /// phase runs, so a payload that is both missing `body` and carries a
    /// numeric `title` reports the missing property.
    pub fn parse(payload: &Value) -> ForumResult<Self> {
        let title = string_field(payload, "title");
        let body = string_field(payload, "body");

        if matches!(title, LooseField::Missing) || matches!(body, LooseField::Missing) {
            return Err(ForumError::NewThreadMissingProperty);
        }

        let (LooseField::Text(title), LooseField::Text(body)) = (title, body) else {
            return Err(ForumError::NewThreadTypeMismatch);
        };

        if title.chars().count() > TITLE_CHAR_LIMIT {
            return Err(ForumError::NewThreadTitleTooLong);
        }

        Ok(Self { title, body })
    }
}

/// Thread as acknowledged right after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddedThread {
    pub id: ThreadId,
    pub title: String,
    pub owner: UserId,
}

/// Full thread view with its ordered comments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailThread {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    /// Always present; a thread without comments carries an empty list.
    pub comments: Vec<DetailComment>,
}

impl DetailThread {
    pub fn new(record: ThreadRecord, comments: Vec<DetailComment>) -> Self {
        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            date: record.date,
            username: record.username,
            comments,
        }
    }
}
