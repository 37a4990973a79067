//! Repository trait for the alias registry.

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stored alias to URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new alias to URL mapping and returns the saved record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already registered;
    /// the existing record is left untouched. Returns [`AppError::Internal`]
    /// on database errors.
    async fn insert(&self, alias: &str, url: &str) -> Result<ShortUrl, AppError>;

    /// Finds the record stored under `alias`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<ShortUrl>, AppError>;
}
