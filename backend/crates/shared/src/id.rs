//! Common ID Types
//!
//! Type-safe, prefix-tagged string IDs for domain entities. Every row the
//! system persists is keyed by an ID of the form `<prefix>-<nanoid>`, e.g.
//! `thread-V1StGXR8_Z5jdHi6B-myT`. The prefix lives on the marker type so
//! IDs of different entities cannot be mixed up at compile time.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use nid::Nanoid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Entities that own an ID namespace declare their string prefix here.
pub trait EntityKind {
    const PREFIX: &'static str;
}

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ThreadId = Id<markers::Thread>;
///
/// let id = ThreadId::generate();
/// assert!(id.as_str().starts_with("thread-"));
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T: EntityKind> Id<T> {
    /// Generate a fresh ID with the marker's prefix and a nanoid tail.
    pub fn generate() -> Self {
        let tail: Nanoid = Nanoid::new();
        Self {
            value: format!("{}-{}", T::PREFIX, tail),
            _marker: PhantomData,
        }
    }
}

impl<T> Id<T> {
    /// Wrap an existing ID string, e.g. one taken from a URL path or a
    /// database row. No shape check: an unknown ID simply matches nothing.
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_owned())
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_string)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    use super::EntityKind;

    pub struct Thread;
    pub struct Comment;
    pub struct Reply;
    pub struct User;

    impl EntityKind for Thread {
        const PREFIX: &'static str = "thread";
    }

    impl EntityKind for Comment {
        const PREFIX: &'static str = "comment";
    }

    impl EntityKind for Reply {
        const PREFIX: &'static str = "reply";
    }

    impl EntityKind for User {
        const PREFIX: &'static str = "user";
    }
}

/// Type aliases for common IDs
pub type ThreadId = Id<markers::Thread>;
pub type CommentId = Id<markers::Comment>;
pub type ReplyId = Id<markers::Reply>;
pub type UserId = Id<markers::User>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_marker_prefix() {
        assert!(ThreadId::generate().as_str().starts_with("thread-"));
        assert!(CommentId::generate().as_str().starts_with("comment-"));
        assert!(ReplyId::generate().as_str().starts_with("reply-"));
        assert!(UserId::generate().as_str().starts_with("user-"));
    }

    #[test]
    fn test_generate_is_unique() {
        let a = ThreadId::generate();
        let b = ThreadId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_string_round_trip() {
        let id: CommentId = "comment-123".into();
        assert_eq!(id.as_str(), "comment-123");
        assert_eq!(id.clone().into_string(), "comment-123");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id: ThreadId = "thread-123".into();
        assert_eq!(serde_json::to_value(&id).unwrap(), "thread-123");
    }

    #[test]
    fn test_fits_id_column() {
        // id columns are VARCHAR(50)
        assert!(ThreadId::generate().as_str().len() <= 50);
        assert!(CommentId::generate().as_str().len() <= 50);
    }
}
