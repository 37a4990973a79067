//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Alias allocation, URL save and resolve
//! - [`services::auth_service::AuthService`] - Basic-auth credential verification

pub mod services;
