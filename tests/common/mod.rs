#![allow(dead_code)]

use base64::Engine as _;
use sqlx::SqlitePool;
use std::sync::Arc;

use linkmint::application::services::{AuthService, ShortenerService};
use linkmint::infrastructure::persistence::{SqliteCursorRepository, SqliteUrlRepository};
use linkmint::state::AppState;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "hunter2";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with_max_length(pool, 4)
}

pub fn create_test_state_with_max_length(pool: SqlitePool, max_alias_length: usize) -> AppState {
    let pool_arc = Arc::new(pool.clone());

    let url_repo = Arc::new(SqliteUrlRepository::new(pool_arc.clone()));
    let cursor_repo = Arc::new(SqliteCursorRepository::new(pool_arc));

    AppState {
        shortener_service: Arc::new(ShortenerService::new(
            url_repo,
            cursor_repo,
            max_alias_length,
        )),
        auth_service: Arc::new(AuthService::new(
            TEST_USER.to_string(),
            TEST_PASSWORD.to_string(),
        )),
        db: pool,
    }
}

pub fn basic_auth(user: &str, password: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
    format!("Basic {encoded}")
}

pub async fn insert_url(pool: &SqlitePool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO urls (alias, url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn stored_cursor(pool: &SqlitePool) -> Option<(i64, String)> {
    sqlx::query_as("SELECT length, digits FROM alias_cursor WHERE id = 1")
        .fetch_optional(pool)
        .await
        .unwrap()
}
