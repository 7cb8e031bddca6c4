//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use crate::application::add_comment::AddCommentUseCase;
use crate::application::add_reply::AddReplyUseCase;
use crate::application::add_thread::AddThreadUseCase;
use crate::application::delete_comment::DeleteCommentUseCase;
use crate::application::delete_reply::DeleteReplyUseCase;
use crate::application::get_thread_detail::GetThreadDetailUseCase;
use crate::domain::repository::{CommentRepository, ReplyRepository, ThreadRepository};
use crate::error::ForumResult;
use crate::presentation::dto::{
    AddedCommentData, AddedReplyData, AddedThreadData, StatusOnlyBody, SuccessBody,
    ThreadDetailData,
};
use crate::presentation::middleware::AccessTokenIdentity;
use kernel::id::{CommentId, ReplyId, ThreadId};

/// Shared state for forum handlers
#[derive(Clone)]
pub struct ForumAppState<R>
where
    R: ThreadRepository + CommentRepository + ReplyRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /threads
pub async fn post_thread<R>(
    State(state): State<ForumAppState<R>>,
    Extension(identity): Extension<AccessTokenIdentity>,
    Json(payload): Json<Value>,
) -> ForumResult<impl IntoResponse>
where
    R: ThreadRepository + CommentRepository + ReplyRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddThreadUseCase::new(state.repo.clone());

    let added_thread = use_case.execute(&payload, &identity.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(AddedThreadData { added_thread })),
    ))
}

/// GET /threads/{thread_id}
pub async fn get_thread<R>(
    State(state): State<ForumAppState<R>>,
    Path(thread_id): Path<String>,
) -> ForumResult<impl IntoResponse>
where
    R: ThreadRepository + CommentRepository + ReplyRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        GetThreadDetailUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let thread = use_case.execute(&ThreadId::from_string(thread_id)).await?;

    Ok(Json(SuccessBody::new(ThreadDetailData { thread })))
}

/// POST /threads/{thread_id}/comments
pub async fn post_comment<R>(
    State(state): State<ForumAppState<R>>,
    Path(thread_id): Path<String>,
    Extension(identity): Extension<AccessTokenIdentity>,
    Json(payload): Json<Value>,
) -> ForumResult<impl IntoResponse>
where
    R: ThreadRepository + CommentRepository + ReplyRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddCommentUseCase::new(state.repo.clone(), state.repo.clone());

    let added_comment = use_case
        .execute(&payload, &identity.user_id, &ThreadId::from_string(thread_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(AddedCommentData { added_comment })),
    ))
}

/// DELETE /threads/{thread_id}/comments/{comment_id}
pub async fn delete_comment<R>(
    State(state): State<ForumAppState<R>>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    Extension(identity): Extension<AccessTokenIdentity>,
) -> ForumResult<impl IntoResponse>
where
    R: ThreadRepository + CommentRepository + ReplyRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCommentUseCase::new(state.repo.clone(), state.repo.clone());

    use_case
        .execute(
            &ThreadId::from_string(thread_id),
            &CommentId::from_string(comment_id),
            &identity.user_id,
        )
        .await?;

    Ok(Json(StatusOnlyBody::success()))
}

/// POST /threads/{thread_id}/comments/{comment_id}/replies
pub async fn post_reply<R>(
    State(state): State<ForumAppState<R>>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    Extension(identity): Extension<AccessTokenIdentity>,
    Json(payload): Json<Value>,
) -> ForumResult<impl IntoResponse>
where
    R: ThreadRepository + CommentRepository + ReplyRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        AddReplyUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let added_reply = use_case
        .execute(
            &payload,
            &identity.user_id,
            &ThreadId::from_string(thread_id),
            &CommentId::from_string(comment_id),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(AddedReplyData { added_reply })),
    ))
}

/// DELETE /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}
pub async fn delete_reply<R>(
    State(state): State<ForumAppState<R>>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
    Extension(identity): Extension<AccessTokenIdentity>,
) -> ForumResult<impl IntoResponse>
where
    R: ThreadRepository + CommentRepository + ReplyRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        DeleteReplyUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    use_case
        .execute(
            &ThreadId::from_string(thread_id),
            &CommentId::from_string(comment_id),
            &ReplyId::from_string(reply_id),
            &identity.user_id,
        )
        .await?;

    Ok(Json(StatusOnlyBody::success()))
}
