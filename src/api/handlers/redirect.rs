//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds `302 Found` with the stored URL in the `Location` header. The
/// read path never touches the allocator or its lock, so redirects keep
/// working at full speed after alias capacity is exhausted.
///
/// # Errors
///
/// Returns 404 Not Found if the alias was never issued.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.shortener_service.resolve_alias(&alias).await?;

    debug!(alias = %alias, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, record.url)]).into_response())
}
