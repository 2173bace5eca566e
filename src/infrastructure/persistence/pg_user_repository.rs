//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserRole};
use crate::domain::repositories::UserRepository;
use crate::error::{AppError, USER_NOT_FOUND};

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    role: i16,
    pwd_hash: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = UserRole::try_from(row.role).map_err(|code| {
            tracing::error!(user_id = row.id, code, "unknown role code in users table");
            AppError::data_access("Database error")
        })?;

        Ok(User {
            id: row.id,
            name: row.name,
            email: row.email,
            role,
            pwd_hash: row.pwd_hash,
        })
    }
}

/// PostgreSQL repository for users.
///
/// Email uniqueness is enforced by the `users_email_key` index (case-insensitive).
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_one(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, role, pwd_hash
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, role, pwd_hash
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn add(&self, user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, role, pwd_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role, pwd_hash
            "#,
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.role.as_i16())
        .bind(user.pwd_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        User::try_from(row)
    }

    async fn update(&self, user: User) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, role = $4
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(user.name)
        .bind(user.email)
        .bind(user.role.as_i16())
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::data_access(USER_NOT_FOUND));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::data_access(USER_NOT_FOUND));
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
