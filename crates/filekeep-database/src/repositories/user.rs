//! User repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use filekeep_core::error::{AppError, ErrorKind};
use filekeep_core::result::AppResult;
use filekeep_core::types::ObjectId;
use filekeep_entity::user::{CreateUser, User};

use super::decode_id;
use crate::store::UserStore;

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: decode_id("users.id", &row.id)?,
            email: row.email,
            password_hash: row.password_hash,
        })
    }
}

/// Repository for the `users` table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>("SELECT id, email, password_hash FROM users WHERE id = $1")
            .bind(id.to_hex())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by email", e))?
        .map(User::try_from)
        .transpose()
    }

    async fn insert(&self, user: CreateUser) -> AppResult<User> {
        let user = user.into_user(ObjectId::new());
        sqlx::query("INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3)")
            .bind(user.id.to_hex())
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let duplicate =
                    matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
                if duplicate {
                    AppError::with_source(
                        ErrorKind::Conflict,
                        format!("A user with email '{}' already exists", user.email),
                        e,
                    )
                } else {
                    AppError::with_source(ErrorKind::Database, "Failed to create user", e)
                }
            })?;
        Ok(user)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(total.max(0) as u64)
    }
}
