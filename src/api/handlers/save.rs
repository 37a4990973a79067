//! Handler for the URL save endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::save::{SaveUrlRequest, SaveUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under the next allocator-issued alias.
///
/// # Endpoint
///
/// `POST /url` (requires basic auth)
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "alias": "0"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for undecodable bodies, invalid URLs, requests
/// that try to pick their own alias, duplicate aliases, and exhausted alias
/// capacity. All failures carry the `{"status": "Error"}` envelope.
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveUrlRequest>, JsonRejection>,
) -> Result<Json<SaveUrlResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|e| AppError::bad_request(format!("failed to decode request: {e}")))?;

    payload.validate()?;

    if payload.alias.as_deref().is_some_and(|alias| !alias.is_empty()) {
        return Err(AppError::bad_request(
            "manual alias assignment is not allowed",
        ));
    }

    let record = state.shortener_service.save_url(&payload.url).await?;

    Ok(Json(SaveUrlResponse::ok(record.alias)))
}
