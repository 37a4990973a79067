//! URL acceptance rules for the save endpoint.
//!
//! The stored value is the submitted string, byte for byte; this check only
//! gates what gets in.

use url::Url;

/// Errors for rejected target URLs.
#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("invalid url: {0}")]
    InvalidFormat(String),

    #[error("url must not contain control characters")]
    ControlCharacter,

    #[error("only http and https urls can be shortened")]
    UnsupportedScheme,
}

/// Accepts exactly the URLs the redirect endpoint will later point clients
/// at.
///
/// Raw ASCII control bytes are refused before parsing: WHATWG parsing
/// strips tab and newline from the input, so the parser alone would admit
/// strings the redirect response can never carry in a `Location` header.
/// Anything that does not parse as an absolute URL, or parses to a scheme
/// other than http/https (`javascript:`, `data:`, `file:`, ...), is
/// refused as well.
///
/// # Errors
///
/// Returns [`UrlCheckError::ControlCharacter`] for control bytes,
/// [`UrlCheckError::InvalidFormat`] for malformed URLs, and
/// [`UrlCheckError::UnsupportedScheme`] for non-HTTP(S) schemes.
pub fn check_target_url(input: &str) -> Result<(), UrlCheckError> {
    if input.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return Err(UrlCheckError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlCheckError::UnsupportedScheme),
    }
}
