//! API route configuration.
//!
//! Write endpoints require basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::save_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes guarded by basic authentication.
///
/// # Endpoints
///
/// - `POST /url` - Allocate the next alias and store the submitted URL
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/url", post(save_handler))
}
