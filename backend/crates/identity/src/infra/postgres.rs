//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entity::{RegisterUser, RegisteredUser};
use crate::domain::repository::{AuthenticationRepository, UserRepository};
use crate::error::{IdentityError, IdentityResult};
use kernel::id::UserId;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgIdentityRepository {
    async fn add_user(
        &self,
        register_user: &RegisterUser,
        password_hash: &str,
    ) -> IdentityResult<RegisteredUser> {
        let id = UserId::generate();

        let row = sqlx::query_as::<_, RegisteredRow>(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(id.as_str())
        .bind(&register_user.username)
        .bind(password_hash)
        .bind(&register_user.fullname)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(user_id = %row.id, username = %row.username, "User row created");

        Ok(RegisteredUser {
            id: row.id.into(),
            username: row.username,
            fullname: row.fullname,
        })
    }

    async fn verify_available_username(&self, username: &str) -> IdentityResult<()> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        if taken {
            Err(IdentityError::UsernameTaken)
        } else {
            Ok(())
        }
    }

    async fn get_password_by_username(&self, username: &str) -> IdentityResult<String> {
        sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(IdentityError::UsernameNotFound)
    }

    async fn get_id_by_username(&self, username: &str) -> IdentityResult<UserId> {
        sqlx::query_scalar::<_, String>("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .map(UserId::from_string)
            .ok_or(IdentityError::UserIdNotFound)
    }
}

impl AuthenticationRepository for PgIdentityRepository {
    async fn add_token(&self, token: &str) -> IdentityResult<()> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> IdentityResult<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authentications WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        if exists {
            Ok(())
        } else {
            Err(IdentityError::RefreshTokenNotRegistered)
        }
    }

    async fn delete_token(&self, token: &str) -> IdentityResult<()> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct RegisteredRow {
    id: String,
    username: String,
    fullname: String,
}
