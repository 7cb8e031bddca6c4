//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use crate::application::add_user::AddUserUseCase;
use crate::application::login_user::LoginUserUseCase;
use crate::application::logout_user::LogoutUserUseCase;
use crate::application::refresh_authentication::RefreshAuthenticationUseCase;
use crate::application::security::{AuthenticationTokenManager, PasswordHash};
use crate::domain::repository::{AuthenticationRepository, UserRepository};
use crate::error::IdentityResult;
use crate::presentation::dto::{
    AccessTokenData, AddedUserData, StatusOnlyBody, SuccessBody,
};

/// Shared state for identity handlers
#[derive(Clone)]
pub struct IdentityAppState<R>
where
    R: UserRepository + AuthenticationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub password_hash: Arc<dyn PasswordHash>,
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
}

/// POST /users
pub async fn post_user<R>(
    State(state): State<IdentityAppState<R>>,
    Json(payload): Json<Value>,
) -> IdentityResult<impl IntoResponse>
where
    R: UserRepository + AuthenticationRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddUserUseCase::new(state.repo.clone(), state.password_hash.clone());

    let added_user = use_case.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(AddedUserData { added_user })),
    ))
}

/// POST /authentications
pub async fn post_authentication<R>(
    State(state): State<IdentityAppState<R>>,
    Json(payload): Json<Value>,
) -> IdentityResult<impl IntoResponse>
where
    R: UserRepository + AuthenticationRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUserUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.token_manager.clone(),
        state.password_hash.clone(),
    );

    let new_auth = use_case.execute(&payload).await?;

    Ok((StatusCode::CREATED, Json(SuccessBody::new(new_auth))))
}

/// PUT /authentications
pub async fn put_authentication<R>(
    State(state): State<IdentityAppState<R>>,
    Json(payload): Json<Value>,
) -> IdentityResult<impl IntoResponse>
where
    R: UserRepository + AuthenticationRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        RefreshAuthenticationUseCase::new(state.repo.clone(), state.token_manager.clone());

    let access_token = use_case.execute(&payload).await?;

    Ok(Json(SuccessBody::new(AccessTokenData { access_token })))
}

/// DELETE /authentications
pub async fn delete_authentication<R>(
    State(state): State<IdentityAppState<R>>,
    Json(payload): Json<Value>,
) -> IdentityResult<impl IntoResponse>
where
    R: UserRepository + AuthenticationRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUserUseCase::new(state.repo.clone());

    use_case.execute(&payload).await?;

    Ok(Json(StatusOnlyBody::success()))
}
