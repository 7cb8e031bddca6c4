//! API DTOs (Data Transfer Objects)
//!
//! Every successful response is wrapped in the same envelope:
//! `{"status": "success", "data": {...}}`. Error bodies are produced by
//! the error types themselves.

use serde::Serialize;

use crate::domain::entity::{AddedComment, AddedReply, AddedThread, DetailThread};

/// Uniform success envelope
#[derive(Debug, Serialize)]
pub struct SuccessBody<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> SuccessBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Data for POST /threads
#[derive(Debug, Serialize)]
pub struct AddedThreadData {
    #[serde(rename = "addedThread")]
    pub added_thread: AddedThread,
}

/// Data for POST /threads/{thread_id}/comments
#[derive(Debug, Serialize)]
pub struct AddedCommentData {
    #[serde(rename = "addedComment")]
    pub added_comment: AddedComment,
}

/// Data for POST /threads/{thread_id}/comments/{comment_id}/replies
#[derive(Debug, Serialize)]
pub struct AddedReplyData {
    #[serde(rename = "addedReply")]
    pub added_reply: AddedReply,
}

/// Data for GET /threads/{thread_id}
#[derive(Debug, Serialize)]
pub struct ThreadDetailData {
    pub thread: DetailThread,
}

/// Body for the delete endpoints, which carry no data key
#[derive(Debug, Serialize)]
pub struct StatusOnlyBody {
    pub status: &'static str,
}

impl StatusOnlyBody {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::{ThreadId, UserId};
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let body = SuccessBody::new(AddedThreadData {
            added_thread: AddedThread {
                id: ThreadId::from("thread-123"),
                title: "sebuah thread".to_owned(),
                owner: UserId::from("user-123"),
            },
        });

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "status": "success",
                "data": {
                    "addedThread": {
                        "id": "thread-123",
                        "title": "sebuah thread",
                        "owner": "user-123",
                    }
                }
            })
        );
    }

    #[test]
    fn test_status_only_body_has_no_data_key() {
        assert_eq!(
            serde_json::to_value(StatusOnlyBody::success()).unwrap(),
            json!({ "status": "success" })
        );
    }
}
