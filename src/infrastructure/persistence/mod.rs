//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound statements, so the crate builds without a database present.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Alias registry storage and retrieval
//! - [`SqliteCursorRepository`] - Allocation cursor persistence

pub mod sqlite_cursor_repository;
pub mod sqlite_url_repository;

pub use sqlite_cursor_repository::SqliteCursorRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
