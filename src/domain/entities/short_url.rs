//! Short URL entity representing an alias to URL mapping.

/// A stored short URL record.
///
/// `alias` is the allocator-issued code, unique across the registry and
/// never reassigned; `url` is the target exactly as it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}
