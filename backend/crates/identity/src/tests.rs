//! Unit tests for the identity crate
//!
//! Use cases run against recording mocks that log repository calls, so the
//! gating order is asserted. Router tests run the real axum stack with the
//! real Argon2/JWT services over an in-memory store.

use std::sync::{Arc, Mutex};

use platform::password::ClearTextPassword;

use crate::application::security::{AuthenticationTokenManager, PasswordHash, TokenPayload};
use crate::domain::entity::{RegisterUser, RegisteredUser};
use crate::domain::repository::{AuthenticationRepository, UserRepository};
use crate::error::{IdentityError, IdentityResult};
use kernel::id::UserId;

// ============================================================================
// Recording mocks
// ============================================================================

#[derive(Clone, Default)]
struct RecordingIdentityRepo {
    calls: Arc<Mutex<Vec<&'static str>>>,
    username_taken: bool,
    stored_password: Option<String>,
    token_registered: bool,
    added_users: Arc<Mutex<Vec<(String, String)>>>,
    added_tokens: Arc<Mutex<Vec<String>>>,
}

impl RecordingIdentityRepo {
    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl UserRepository for RecordingIdentityRepo {
    async fn add_user(
        &self,
        register_user: &RegisterUser,
        password_hash: &str,
    ) -> IdentityResult<RegisteredUser> {
        self.record("add_user");
        self.added_users
            .lock()
            .unwrap()
            .push((register_user.username.clone(), password_hash.to_owned()));
        Ok(RegisteredUser {
            id: "user-123".into(),
            username: register_user.username.clone(),
            fullname: register_user.fullname.clone(),
        })
    }

    async fn verify_available_username(&self, _username: &str) -> IdentityResult<()> {
        self.record("verify_available_username");
        if self.username_taken {
            Err(IdentityError::UsernameTaken)
        } else {
            Ok(())
        }
    }

    async fn get_password_by_username(&self, _username: &str) -> IdentityResult<String> {
        self.record("get_password_by_username");
        self.stored_password
            .clone()
            .ok_or(IdentityError::UsernameNotFound)
    }

    async fn get_id_by_username(&self, _username: &str) -> IdentityResult<UserId> {
        self.record("get_id_by_username");
        Ok("user-123".into())
    }
}

impl AuthenticationRepository for RecordingIdentityRepo {
    async fn add_token(&self, token: &str) -> IdentityResult<()> {
        self.record("add_token");
        self.added_tokens.lock().unwrap().push(token.to_owned());
        Ok(())
    }

    async fn check_availability_token(&self, _token: &str) -> IdentityResult<()> {
        self.record("check_availability_token");
        if self.token_registered {
            Ok(())
        } else {
            Err(IdentityError::RefreshTokenNotRegistered)
        }
    }

    async fn delete_token(&self, _token: &str) -> IdentityResult<()> {
        self.record("delete_token");
        Ok(())
    }
}

/// Marks hashes as `hashed:<plain>` so tests can see what was stored.
#[derive(Default)]
struct FakePasswordHash {
    hash_calls: Mutex<u32>,
}

impl PasswordHash for FakePasswordHash {
    fn hash(&self, password: &ClearTextPassword) -> IdentityResult<String> {
        *self.hash_calls.lock().unwrap() += 1;
        Ok(format!("hashed:{}", password.as_str()))
    }

    fn compare(&self, password: &ClearTextPassword, encrypted: &str) -> IdentityResult<()> {
        if encrypted == format!("hashed:{}", password.as_str()) {
            Ok(())
        } else {
            Err(IdentityError::WrongCredentials)
        }
    }
}

/// Tokens are `access:<id>:<username>` / `refresh:<id>:<username>`.
struct FakeTokenManager;

impl AuthenticationTokenManager for FakeTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> IdentityResult<String> {
        Ok(format!("access:{}:{}", payload.id, payload.username))
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> IdentityResult<String> {
        Ok(format!("refresh:{}:{}", payload.id, payload.username))
    }

    fn verify_refresh_token(&self, token: &str) -> IdentityResult<()> {
        if token.starts_with("refresh:") {
            Ok(())
        } else {
            Err(IdentityError::InvalidRefreshToken)
        }
    }

    fn decode_payload(&self, token: &str) -> IdentityResult<TokenPayload> {
        let mut parts = token.splitn(3, ':');
        let _ = parts.next();
        let id = parts.next().ok_or(IdentityError::InvalidRefreshToken)?;
        let username = parts.next().ok_or(IdentityError::InvalidRefreshToken)?;
        Ok(TokenPayload {
            id: id.to_owned(),
            username: username.to_owned(),
        })
    }
}

mod add_user_tests {
    use super::*;
    use crate::application::AddUserUseCase;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "username": "dicoding",
            "password": "secret_password",
            "fullname": "Dicoding Indonesia",
        })
    }

    #[tokio::test]
    async fn test_registers_with_hashed_password() {
        let repo = Arc::new(RecordingIdentityRepo::default());
        let hasher = Arc::new(FakePasswordHash::default());
        let use_case = AddUserUseCase::new(repo.clone(), hasher.clone());

        let registered = use_case.execute(&payload()).await.unwrap();

        assert_eq!(registered.username, "dicoding");
        assert_eq!(registered.fullname, "Dicoding Indonesia");
        assert_eq!(
            repo.calls(),
            vec!["verify_available_username", "add_user"]
        );

        let stored = repo.added_users.lock().unwrap();
        assert_eq!(stored[0].1, "hashed:secret_password");
    }

    #[tokio::test]
    async fn test_taken_username_stops_before_hashing() {
        let repo = Arc::new(RecordingIdentityRepo {
            username_taken: true,
            ..Default::default()
        });
        let hasher = Arc::new(FakePasswordHash::default());
        let use_case = AddUserUseCase::new(repo.clone(), hasher.clone());

        let err = use_case.execute(&payload()).await.unwrap_err();

        assert!(matches!(err, IdentityError::UsernameTaken));
        assert_eq!(repo.calls(), vec!["verify_available_username"]);
        assert_eq!(*hasher.hash_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_repository() {
        let repo = Arc::new(RecordingIdentityRepo::default());
        let use_case = AddUserUseCase::new(repo.clone(), Arc::new(FakePasswordHash::default()));

        let err = use_case
            .execute(&json!({ "username": "dicoding" }))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::RegisterUserMissingProperty));
        assert!(repo.calls().is_empty());
    }
}

mod login_user_tests {
    use super::*;
    use crate::application::LoginUserUseCase;
    use serde_json::json;

    fn use_case(
        repo: Arc<RecordingIdentityRepo>,
    ) -> LoginUserUseCase<RecordingIdentityRepo, RecordingIdentityRepo, FakeTokenManager, FakePasswordHash>
    {
        LoginUserUseCase::new(
            repo.clone(),
            repo,
            Arc::new(FakeTokenManager),
            Arc::new(FakePasswordHash::default()),
        )
    }

    #[tokio::test]
    async fn test_issues_and_stores_token_pair() {
        let repo = Arc::new(RecordingIdentityRepo {
            stored_password: Some("hashed:secret_password".to_string()),
            ..Default::default()
        });

        let auth = use_case(repo.clone())
            .execute(&json!({ "username": "dicoding", "password": "secret_password" }))
            .await
            .unwrap();

        assert_eq!(auth.access_token, "access:user-123:dicoding");
        assert_eq!(auth.refresh_token, "refresh:user-123:dicoding");
        assert_eq!(
            repo.calls(),
            vec![
                "get_password_by_username",
                "get_id_by_username",
                "add_token",
            ]
        );
        assert_eq!(
            repo.added_tokens.lock().unwrap().as_slice(),
            &["refresh:user-123:dicoding".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_username_is_reported_as_such() {
        let repo = Arc::new(RecordingIdentityRepo::default());

        let err = use_case(repo.clone())
            .execute(&json!({ "username": "ghost", "password": "whatever" }))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::UsernameNotFound));
        assert_eq!(repo.calls(), vec!["get_password_by_username"]);
    }

    #[tokio::test]
    async fn test_wrong_password_issues_nothing() {
        let repo = Arc::new(RecordingIdentityRepo {
            stored_password: Some("hashed:correct_password".to_string()),
            ..Default::default()
        });

        let err = use_case(repo.clone())
            .execute(&json!({ "username": "dicoding", "password": "wrong_password" }))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::WrongCredentials));
        assert_eq!(repo.calls(), vec!["get_password_by_username"]);
        assert!(repo.added_tokens.lock().unwrap().is_empty());
    }
}

mod refresh_authentication_tests {
    use super::*;
    use crate::application::RefreshAuthenticationUseCase;
    use serde_json::json;

    #[tokio::test]
    async fn test_trades_registered_refresh_token_for_access_token() {
        let repo = Arc::new(RecordingIdentityRepo {
            token_registered: true,
            ..Default::default()
        });
        let use_case = RefreshAuthenticationUseCase::new(repo.clone(), Arc::new(FakeTokenManager));

        let access_token = use_case
            .execute(&json!({ "refreshToken": "refresh:user-123:dicoding" }))
            .await
            .unwrap();

        assert_eq!(access_token, "access:user-123:dicoding");
        assert_eq!(repo.calls(), vec!["check_availability_token"]);
    }

    #[tokio::test]
    async fn test_bad_signature_never_reaches_store() {
        let repo = Arc::new(RecordingIdentityRepo {
            token_registered: true,
            ..Default::default()
        });
        let use_case = RefreshAuthenticationUseCase::new(repo.clone(), Arc::new(FakeTokenManager));

        let err = use_case
            .execute(&json!({ "refreshToken": "garbage" }))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::InvalidRefreshToken));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_revoked_token_is_rejected() {
        let repo = Arc::new(RecordingIdentityRepo::default());
        let use_case = RefreshAuthenticationUseCase::new(repo.clone(), Arc::new(FakeTokenManager));

        let err = use_case
            .execute(&json!({ "refreshToken": "refresh:user-123:dicoding" }))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::RefreshTokenNotRegistered));
    }

    #[tokio::test]
    async fn test_missing_payload_field() {
        let repo = Arc::new(RecordingIdentityRepo::default());
        let use_case = RefreshAuthenticationUseCase::new(repo.clone(), Arc::new(FakeTokenManager));

        let err = use_case.execute(&json!({})).await.unwrap_err();
        assert!(matches!(err, IdentityError::MissingRefreshToken));

        let err = use_case
            .execute(&json!({ "refreshToken": 123 }))
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::RefreshTokenTypeMismatch));
    }
}

mod logout_user_tests {
    use super::*;
    use crate::application::LogoutUserUseCase;
    use serde_json::json;

    #[tokio::test]
    async fn test_revokes_registered_token() {
        let repo = Arc::new(RecordingIdentityRepo {
            token_registered: true,
            ..Default::default()
        });
        let use_case = LogoutUserUseCase::new(repo.clone());

        use_case
            .execute(&json!({ "refreshToken": "refresh:user-123:dicoding" }))
            .await
            .unwrap();

        assert_eq!(
            repo.calls(),
            vec!["check_availability_token", "delete_token"]
        );
    }

    #[tokio::test]
    async fn test_unregistered_token_is_not_deleted() {
        let repo = Arc::new(RecordingIdentityRepo::default());
        let use_case = LogoutUserUseCase::new(repo.clone());

        let err = use_case
            .execute(&json!({ "refreshToken": "refresh:user-123:dicoding" }))
            .await
            .unwrap_err();

        assert!(matches!(err, IdentityError::RefreshTokenNotRegistered));
        assert_eq!(repo.calls(), vec!["check_availability_token"]);
    }
}

// ============================================================================
// Router tests over an in-memory repository with the real security stack
// ============================================================================

mod router_tests {
    use super::*;
    use crate::infra::security::{Argon2PasswordHash, JwtTokenManager};
    use crate::presentation::router::identity_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use platform::token::TokenCodec;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    struct StoredUser {
        id: UserId,
        username: String,
        password: String,
        fullname: String,
    }

    #[derive(Clone, Default)]
    struct InMemoryIdentityRepo {
        users: Arc<Mutex<Vec<StoredUser>>>,
        tokens: Arc<Mutex<Vec<String>>>,
    }

    impl UserRepository for InMemoryIdentityRepo {
        async fn add_user(
            &self,
            register_user: &RegisterUser,
            password_hash: &str,
        ) -> IdentityResult<RegisteredUser> {
            let id = UserId::generate();
            self.users.lock().unwrap().push(StoredUser {
                id: id.clone(),
                username: register_user.username.clone(),
                password: password_hash.to_owned(),
                fullname: register_user.fullname.clone(),
            });
            Ok(RegisteredUser {
                id,
                username: register_user.username.clone(),
                fullname: register_user.fullname.clone(),
            })
        }

        async fn verify_available_username(&self, username: &str) -> IdentityResult<()> {
            let users = self.users.lock().unwrap();
            if users.iter().any(|u| u.username == username) {
                Err(IdentityError::UsernameTaken)
            } else {
                Ok(())
            }
        }

        async fn get_password_by_username(&self, username: &str) -> IdentityResult<String> {
            let users = self.users.lock().unwrap();
            users
                .iter()
                .find(|u| u.username == username)
                .map(|u| u.password.clone())
                .ok_or(IdentityError::UsernameNotFound)
        }

        async fn get_id_by_username(&self, username: &str) -> IdentityResult<UserId> {
            let users = self.users.lock().unwrap();
            users
                .iter()
                .find(|u| u.username == username)
                .map(|u| u.id.clone())
                .ok_or(IdentityError::UserIdNotFound)
        }
    }

    impl AuthenticationRepository for InMemoryIdentityRepo {
        async fn add_token(&self, token: &str) -> IdentityResult<()> {
            self.tokens.lock().unwrap().push(token.to_owned());
            Ok(())
        }

        async fn check_availability_token(&self, token: &str) -> IdentityResult<()> {
            let tokens = self.tokens.lock().unwrap();
            if tokens.iter().any(|t| t == token) {
                Ok(())
            } else {
                Err(IdentityError::RefreshTokenNotRegistered)
            }
        }

        async fn delete_token(&self, token: &str) -> IdentityResult<()> {
            self.tokens.lock().unwrap().retain(|t| t != token);
            Ok(())
        }
    }

    fn app() -> Router {
        let codec = Arc::new(TokenCodec::new(
            b"test_access_key",
            b"test_refresh_key",
            Duration::from_secs(1800),
        ));
        identity_router_generic(
            InMemoryIdentityRepo::default(),
            Arc::new(Argon2PasswordHash),
            Arc::new(JwtTokenManager::new(codec)),
        )
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_registration_and_duplicate_username() {
        let app = app();
        let payload = json!({
            "username": "dicoding",
            "password": "secret_password",
            "fullname": "Dicoding Indonesia",
        });

        let response = app
            .clone()
            .oneshot(json_request("POST", "/users", payload.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["addedUser"]["username"], "dicoding");
        assert!(
            body["data"]["addedUser"]["id"]
                .as_str()
                .unwrap()
                .starts_with("user-")
        );

        let response = app
            .oneshot(json_request("POST", "/users", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "username tidak tersedia");
    }

    #[tokio::test]
    async fn test_login_refresh_logout_lifecycle() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({
                    "username": "dicoding",
                    "password": "secret_password",
                    "fullname": "Dicoding Indonesia",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Login
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/authentications",
                json!({ "username": "dicoding", "password": "secret_password" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        let refresh_token = body["data"]["refreshToken"].as_str().unwrap().to_owned();
        assert!(body["data"]["accessToken"].as_str().is_some());

        // Refresh
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/authentications",
                json!({ "refreshToken": refresh_token }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["data"]["accessToken"].as_str().is_some());

        // Logout
        let response = app
            .clone()
            .oneshot(json_request(
                "DELETE",
                "/authentications",
                json!({ "refreshToken": refresh_token }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // The token no longer refreshes
        let response = app
            .oneshot(json_request(
                "PUT",
                "/authentications",
                json!({ "refreshToken": refresh_token }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "refresh token tidak ditemukan di database");
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let app = app();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({
                    "username": "dicoding",
                    "password": "secret_password",
                    "fullname": "Dicoding Indonesia",
                }),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "POST",
                "/authentications",
                json!({ "username": "dicoding", "password": "wrong_password" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "kredensial yang Anda masukkan salah");
    }
}
