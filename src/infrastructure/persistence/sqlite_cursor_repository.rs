//! SQLite implementation of the cursor store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::cursor::Cursor;
use crate::domain::repositories::CursorRepository;
use crate::error::AppError;

/// SQLite store for the allocation cursor.
///
/// The cursor lives in a single keyed row, created lazily by the first
/// commit. Digits are stored as a JSON array next to the derived length,
/// and both are validated on the way back in so corrupted state fails the
/// load instead of silently reissuing aliases.
pub struct SqliteCursorRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCursorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CursorRepository for SqliteCursorRepository {
    async fn load(&self) -> Result<Cursor, AppError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT length, digits FROM alias_cursor WHERE id = 1")
                .fetch_optional(self.pool.as_ref())
                .await?;

        let Some((length, digits)) = row else {
            return Ok(Cursor::initial());
        };

        let digits: Vec<u8> = serde_json::from_str(&digits).map_err(|e| {
            tracing::error!(error = %e, "stored cursor digits are not a valid JSON array");
            AppError::internal("internal server error")
        })?;

        let cursor = Cursor::from_digits(digits).map_err(|e| {
            tracing::error!(error = %e, "stored cursor digits violate the counter invariant");
            AppError::internal("internal server error")
        })?;

        if cursor.length() as i64 != length {
            tracing::error!(
                stored_length = length,
                digit_count = cursor.length(),
                "stored cursor length does not match its digits"
            );
            return Err(AppError::internal("internal server error"));
        }

        Ok(cursor)
    }

    async fn commit(&self, cursor: &Cursor) -> Result<(), AppError> {
        let digits = serde_json::to_string(cursor.digits()).map_err(|e| {
            tracing::error!(error = %e, "failed to encode cursor digits");
            AppError::internal("internal server error")
        })?;

        sqlx::query(
            "INSERT INTO alias_cursor (id, length, digits) VALUES (1, ?, ?) \
             ON CONFLICT (id) DO UPDATE SET length = excluded.length, digits = excluded.digits",
        )
        .bind(cursor.length() as i64)
        .bind(digits)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
