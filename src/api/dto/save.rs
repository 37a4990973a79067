//! DTOs for the URL save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to store a URL under a freshly allocated alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveUrlRequest {
    /// The URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "invalid url"))]
    pub url: String,

    /// Accepted for wire compatibility only. Aliases are always assigned by
    /// the allocator, so any non-empty value is rejected.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Successful save response carrying the issued alias.
#[derive(Debug, Serialize)]
pub struct SaveUrlResponse {
    pub status: &'static str,
    pub alias: String,
}

impl SaveUrlResponse {
    /// Builds the `"OK"` envelope around an issued alias.
    pub fn ok(alias: String) -> Self {
        Self {
            status: "OK",
            alias,
        }
    }
}
