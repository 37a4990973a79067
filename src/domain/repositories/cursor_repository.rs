//! Repository trait for allocator progress state.

use crate::domain::cursor::Cursor;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the single persisted allocation cursor.
///
/// `load` must hand back [`Cursor::initial`] when nothing has been committed
/// yet, so callers never special-case first use.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCursorRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CursorRepository: Send + Sync {
    /// Returns the last committed cursor, or the initial cursor if none
    /// was ever stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or when the stored
    /// state fails the counter invariant checks.
    async fn load(&self) -> Result<Cursor, AppError>;

    /// Durably replaces the stored cursor.
    ///
    /// Once this returns, every alias rendered from earlier states counts
    /// as spent: a crash before the matching registry insert skips those
    /// aliases instead of reissuing them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn commit(&self, cursor: &Cursor) -> Result<(), AppError>;
}
