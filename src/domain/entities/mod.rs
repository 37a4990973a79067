//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic; the allocation
//! machinery lives next door in [`crate::domain::allocator`].

pub mod short_url;

pub use short_url::ShortUrl;
