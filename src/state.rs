use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AuthService, ShortenerService};
use crate::infrastructure::persistence::{SqliteCursorRepository, SqliteUrlRepository};

/// The shortener service instantiated with the SQLite adapters.
pub type SqliteShortenerService = ShortenerService<SqliteUrlRepository, SqliteCursorRepository>;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<SqliteShortenerService>,
    pub auth_service: Arc<AuthService>,
    pub db: SqlitePool,
}
