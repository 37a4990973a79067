//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Alias registry operations
//! - [`CursorRepository`] - Allocation cursor persistence

pub mod cursor_repository;
pub mod url_repository;

pub use cursor_repository::CursorRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use cursor_repository::MockCursorRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
