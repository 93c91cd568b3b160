//! Error types for network and decode failures
//!
//! Everything that can go wrong while talking to the listing API or
//! downloading a picture ends up here. The `Display` text is what the
//! user sees after the `Error: ` prefix, so keep it short and readable.

use thiserror::Error;

/// Message used when a failure carries no description of its own
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// A failed fetch, either of the listing or of a single picture.
///
/// Variants carry strings rather than the source errors because messages
/// in iced must be `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure (DNS, connection refused, timeout, ...)
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {code} {reason}")]
    Status { code: u16, reason: String },

    /// The body could not be decoded as a listing
    #[error("{0}")]
    Decode(String),

    /// The picture bytes could not be decoded
    #[error("{0}")]
    Image(String),

    #[error("An unexpected error occurred")]
    Unexpected,
}

impl FetchError {
    /// Human-readable message, falling back to a generic one when empty
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return FetchError::Network("timeout".to_string());
        }

        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }

        if let Some(status) = err.status() {
            return FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            };
        }

        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl From<image::ImageError> for FetchError {
    fn from(err: image::ImageError) -> Self {
        FetchError::Image(err.to_string())
    }
}

impl From<tokio::task::JoinError> for FetchError {
    fn from(err: tokio::task::JoinError) -> Self {
        log::error!("Background task failed: {}", err);
        FetchError::Unexpected
    }
}
