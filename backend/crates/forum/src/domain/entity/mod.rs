//! Domain Entities
//!
//! Value objects for threads, comments, and replies. `New*` entities are
//! parsed from loose JSON payloads with a two-phase presence/type check;
//! `Added*` and `Detail*` entities are shaped from repository rows.

pub mod comment;
pub mod reply;
pub mod thread;

pub use comment::{AddedComment, DELETED_COMMENT_MASK, DetailComment, NewComment};
pub use reply::{AddedReply, DELETED_REPLY_MASK, DetailReply, NewReply};
pub use thread::{AddedThread, DetailThread, NewThread};

use serde_json::Value;

/// Outcome of reading one loosely-typed payload field.
///
/// Presence is checked first, with JSON-level falsiness counting as absent
/// (missing key, `null`, empty string, `0`, `false`); only a present,
/// truthy, non-string value is a type mismatch.
pub(crate) enum LooseField {
    Missing,
    WrongType,
    Text(String),
}

pub(crate) fn string_field(payload: &Value, key: &str) -> LooseField {
    match payload.get(key) {
        None | Some(Value::Null) => LooseField::Missing,
        Some(Value::String(s)) if s.is_empty() => LooseField::Missing,
        Some(Value::String(s)) => LooseField::Text(s.clone()),
        Some(Value::Bool(false)) => LooseField::Missing,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => LooseField::Missing,
        Some(_) => LooseField::WrongType,
    }
}
