//! Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using HTTP Basic credentials from the
/// Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(<user>:<password>)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or malformed
/// - The credential pair does not match the configured values
///
/// 401 responses carry a `WWW-Authenticate: Basic` challenge per RFC 7617.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/url", post(save_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("missing or malformed authorization header"))?;

    let req = Request::from_parts(parts, body);

    st.auth_service
        .verify(&user, password.as_deref().unwrap_or_default())?;

    Ok(next.run(req).await)
}
