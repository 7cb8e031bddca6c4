//! Add Thread Use Case
//!
//! Validates the payload and persists a new thread. Creation has no parent,
//! so there is no existence check.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entity::{AddedThread, NewThread};
use crate::domain::repository::ThreadRepository;
use crate::error::ForumResult;
use kernel::id::UserId;

/// Add thread use case
pub struct AddThreadUseCase<T>
where
    T: ThreadRepository,
{
    thread_repo: Arc<T>,
}

impl<T> AddThreadUseCase<T>
where
    T: ThreadRepository,
{
    pub fn new(thread_repo: Arc<T>) -> Self {
        Self { thread_repo }
    }

    pub async fn execute(&self, payload: &Value, owner_id: &UserId) -> ForumResult<AddedThread> {
        let new_thread = NewThread::parse(payload)?;

        let added_thread = self.thread_repo.add_thread(&new_thread, owner_id).await?;

        tracing::info!(
            thread_id = %added_thread.id,
            owner = %added_thread.owner,
            "Thread created"
        );

        Ok(added_thread)
    }
}
