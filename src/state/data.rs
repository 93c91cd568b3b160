//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the network layer and the UI layer.

use serde::Deserialize;

/// A single entry of a listing page, as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageItem {
    /// Unique identifier assigned by the API
    pub id: String,
    /// Photographer credited for the picture
    pub author: String,
    /// Original width in pixels
    pub width: u32,
    /// Original height in pixels
    pub height: u32,
    /// Page on the source site (not the picture itself)
    pub url: String,
    /// Direct link to the full-size picture bytes
    pub download_url: String,
}

#[cfg(test)]
impl ImageItem {
    /// Minimal item for tests, every field derived from `id`
    pub fn sample(id: &str) -> Self {
        Self {
            id: id.to_string(),
            author: format!("Author {}", id),
            width: 640,
            height: 480,
            url: format!("https://example.com/photos/{}", id),
            download_url: format!("https://example.com/id/{}/640/480", id),
        }
    }
}
