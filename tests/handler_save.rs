mod common;

use axum::{Router, middleware, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

use linkmint::api::handlers::save_handler;
use linkmint::api::middleware::auth;
use linkmint::state::AppState;

fn save_app(state: AppState) -> Router {
    Router::new()
        .route("/url", post(save_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state)
}

#[sqlx::test]
async fn test_save_issues_sequential_aliases(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(save_app(state)).unwrap();

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "url": "https://example.com/first" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["alias"], "0");

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "url": "https://example.com/second" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["alias"], "1");

    assert_eq!(common::count_urls(&pool).await, 2);
}

#[sqlx::test]
async fn test_save_requires_auth(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(save_app(state)).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_unauthorized();

    let challenge = response.header("www-authenticate");
    assert_eq!(challenge, "Basic realm=\"url-shortener\"");

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Error");
}

#[sqlx::test]
async fn test_save_rejects_wrong_credentials(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(save_app(state)).unwrap();

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, "wrong-password"),
        )
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_unauthorized();

    // Nothing was allocated or stored.
    assert_eq!(common::count_urls(&pool).await, 0);
    assert!(common::stored_cursor(&pool).await.is_none());
}

#[sqlx::test]
async fn test_save_rejects_manual_alias(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(save_app(state)).unwrap();

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "url": "https://example.com", "alias": "custom" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Error");
    assert_eq!(body["error"], "manual alias assignment is not allowed");

    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_save_accepts_empty_alias_field(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(save_app(state)).unwrap();

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["alias"], "0");
}

#[sqlx::test]
async fn test_save_rejects_invalid_url(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(save_app(state)).unwrap();

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Error");

    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_save_rejects_non_http_scheme(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(save_app(state)).unwrap();

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "url": "javascript:alert(1)" }))
        .await;

    response.assert_status_bad_request();

    // The rejected request must not burn an alias.
    assert!(common::stored_cursor(&pool).await.is_none());
}

#[sqlx::test]
async fn test_save_rejects_url_with_control_characters(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(save_app(state)).unwrap();

    // A raw newline survives URL parsing (the parser strips it) but can
    // never be sent back in a Location header, so it must be refused here
    // instead of becoming an alias that redirects to nothing.
    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Error");

    assert_eq!(common::count_urls(&pool).await, 0);
    assert!(common::stored_cursor(&pool).await.is_none());
}

#[sqlx::test]
async fn test_save_rejects_missing_url_field(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(save_app(state)).unwrap();

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "alias": "" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Error");
}

#[sqlx::test]
async fn test_save_skips_alias_on_registry_collision(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(save_app(state)).unwrap();

    // Occupy the alias the allocator will issue first.
    common::insert_url(&pool, "0", "https://already.example.com").await;

    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "url": "https://example.com/collides" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "Error");

    // The colliding alias was spent, never reissued: the next save gets "1"
    // and the original record is untouched.
    let response = server
        .post("/url")
        .add_header(
            "Authorization",
            common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
        )
        .json(&json!({ "url": "https://example.com/next" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["alias"], "1");

    let stored: (String,) = sqlx::query_as("SELECT url FROM urls WHERE alias = '0'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored.0, "https://already.example.com");
}

#[sqlx::test]
async fn test_save_reports_exhaustion_and_stays_exhausted(pool: SqlitePool) {
    let state = common::create_test_state_with_max_length(pool.clone(), 1);
    let server = TestServer::new(save_app(state)).unwrap();

    // A single-symbol alphabet run can issue 61 aliases; the final code "z"
    // is withheld because the counter cannot grow past the maximum length.
    for i in 0..61 {
        let response = server
            .post("/url")
            .add_header(
                "Authorization",
                common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
            )
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;
        response.assert_status_ok();
    }

    for _ in 0..2 {
        let response = server
            .post("/url")
            .add_header(
                "Authorization",
                common::basic_auth(common::TEST_USER, common::TEST_PASSWORD),
            )
            .json(&json!({ "url": "https://example.com/overflow" }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "Error");
        assert!(body["error"].as_str().unwrap().contains("exhausted"));
    }

    assert_eq!(common::count_urls(&pool).await, 61);
}
