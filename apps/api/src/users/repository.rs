use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::{NewUser, User};

/// Storage for the `users` table.
///
/// Carried in `AppState` as `Arc<dyn UserRepository>`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a row and returns it with its assigned id.
    /// A taken email yields `AppError::Conflict`.
    async fn insert(&self, user: &NewUser) -> Result<User, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Exact-match lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// All rows in ascending id order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Replaces `username` and `email`. `None` when no row has `id`.
    async fn update(&self, id: i32, user: &NewUser) -> Result<Option<User>, AppError>;
}

/// PostgreSQL-backed repository.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email) VALUES ($1, $2) RETURNING *",
        )
        .bind(&user.username)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn update(&self, id: i32, user: &NewUser) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = $1, email = $2 WHERE id = $3 RETURNING *",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)
    }
}

/// A unique violation on `users.email` means another writer claimed the
/// address after the service's existence check.
fn map_write_error(err: sqlx::Error) -> AppError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => AppError::duplicate_email(),
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_write_error_passes_through_non_database_errors() {
        let err = map_write_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));
    }
}
