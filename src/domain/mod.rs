//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines entities, repository interfaces, and the alias allocation engine
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`alphabet`] - The fixed base-62 symbol set
//! - [`cursor`] - Allocation counter state
//! - [`allocator`] - The render-and-advance allocation step
//!
//! # Allocation Flow
//!
//! 1. HTTP handler receives a save request
//! 2. [`crate::application::services::ShortenerService`] loads the cursor,
//!    runs [`allocator::advance`], and commits the advanced state
//! 3. Only then is the alias inserted into the registry
//!
//! Committing before inserting means a crash in between skips an alias
//! rather than ever issuing it twice.

pub mod allocator;
pub mod alphabet;
pub mod cursor;
pub mod entities;
pub mod repositories;
