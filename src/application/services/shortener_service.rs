//! Alias allocation and URL resolution service.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::allocator;
use crate::domain::entities::ShortUrl;
use crate::domain::repositories::{CursorRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::url_check::check_target_url;

/// Service for saving URLs under allocator-issued aliases and resolving
/// them back.
///
/// Allocation is serialized: the load, advance, commit sequence runs under
/// `alloc_lock`, so two concurrent save requests can never observe the same
/// cursor state and walk away with the same alias. The registry insert runs
/// after the lock is released; by then the committed cursor has already
/// spent the alias, so a failed insert skips the code instead of recycling
/// it.
pub struct ShortenerService<U: UrlRepository, C: CursorRepository> {
    url_repository: Arc<U>,
    cursor_repository: Arc<C>,
    max_alias_length: usize,
    alloc_lock: Mutex<()>,
}

impl<U: UrlRepository, C: CursorRepository> ShortenerService<U, C> {
    /// Creates a new shortener service.
    pub fn new(url_repository: Arc<U>, cursor_repository: Arc<C>, max_alias_length: usize) -> Self {
        Self {
            url_repository,
            cursor_repository,
            max_alias_length,
            alloc_lock: Mutex::new(()),
        }
    }

    /// Allocates the next alias and stores the mapping under it.
    ///
    /// The URL is stored exactly as submitted; only its shape is checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not parse as
    /// http(s), [`AppError::Exhausted`] when alias capacity is spent,
    /// [`AppError::Conflict`] if the registry already holds the alias, and
    /// [`AppError::Internal`] on storage failures.
    pub async fn save_url(&self, url: &str) -> Result<ShortUrl, AppError> {
        check_target_url(url).map_err(|e| AppError::bad_request(e.to_string()))?;

        let alias = self.allocate_alias().await?;

        let record = self.url_repository.insert(&alias, url).await?;
        tracing::info!(alias = %record.alias, id = record.id, "url saved");

        Ok(record)
    }

    /// Resolves an alias to its stored record.
    ///
    /// Never touches the allocator, so lookups keep working after alias
    /// capacity is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown aliases and
    /// [`AppError::Internal`] on storage failures.
    pub async fn resolve_alias(&self, alias: &str) -> Result<ShortUrl, AppError> {
        self.url_repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("alias not found"))
    }

    /// Runs one serialized allocation step and returns the issued alias.
    ///
    /// The advanced cursor is committed before the alias leaves this
    /// function. A crash after the commit loses the alias, which is the
    /// tolerated failure mode; reissuing one would require a second caller
    /// to observe the pre-commit state, which the lock rules out.
    async fn allocate_alias(&self) -> Result<String, AppError> {
        let _guard = self.alloc_lock.lock().await;

        let cursor = self.cursor_repository.load().await?;
        let allocation = allocator::advance(&cursor, self.max_alias_length)?;
        self.cursor_repository.commit(&allocation.next).await?;

        Ok(allocation.alias)
    }
}
