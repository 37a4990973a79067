//! # linkmint
//!
//! A URL shortening service whose aliases come from a deterministic base-62
//! counter instead of random codes, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The allocation engine, entities, and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Sequential base-62 aliases: shortest codes first, no collisions, no retries
//! - Durable allocation cursor; restarts resume the sequence exactly
//! - Crash-safe ordering: an alias is spent before it is ever handed out
//! - Recoverable exhaustion: saves fail cleanly once capacity is spent,
//!   redirects keep working
//! - Basic-auth protected write endpoint
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="change-me"
//! export DATABASE_URL="sqlite://data/shortener.db"  # Optional
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, ShortenerService};
    pub use crate::domain::allocator::{Allocation, Exhausted};
    pub use crate::domain::cursor::Cursor;
    pub use crate::domain::entities::ShortUrl;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
