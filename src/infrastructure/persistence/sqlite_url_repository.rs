//! SQLite implementation of the URL registry.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// SQLite repository for alias to URL records.
///
/// Uses bound statements for SQL injection protection. The `UNIQUE`
/// constraint on `alias` is the final guard against a duplicate code
/// reaching storage; it surfaces as [`AppError::Conflict`].
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, alias: &str, url: &str) -> Result<ShortUrl, AppError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO urls (alias, url) VALUES (?, ?) RETURNING id")
            .bind(alias)
            .bind(url)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(ShortUrl::new(id, alias.to_owned(), url.to_owned()))
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<ShortUrl>, AppError> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, alias, url FROM urls WHERE alias = ?")
                .bind(alias)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(id, alias, url)| ShortUrl::new(id, alias, url)))
    }
}
