use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::FetchError;
use crate::state::config::SliderConfig;
use crate::state::data::ImageItem;

/// Per-request timeout for the listing and for picture downloads
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the listing API.
/// Cheap to clone: the connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ImageClient {
    http: Client,
}

impl ImageClient {
    /// Create a new client with the default timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http })
    }

    /// Fetch one page of the listing described by `config`
    ///
    /// Issues a single `GET {url}?page={page}&limit={limit}` and decodes the
    /// body as a JSON array of images.
    pub async fn fetch_page(&self, config: &SliderConfig) -> Result<Vec<ImageItem>, FetchError> {
        let url = config.listing_url();
        let body = self.get_bytes(&url).await?;
        let images = decode_listing(&body)?;

        log::debug!("Decoded {} images from {}", images.len(), url);
        Ok(images)
    }

    /// Download raw bytes from `url`, failing on non-success status
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http.get(url).send().await?;
        check_status(response.status())?;

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Reject anything outside the 2xx range
fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }

    Err(FetchError::Status {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    })
}

/// Decode a listing body. Anything but a JSON array of images is an error,
/// including `null`.
pub fn decode_listing(body: &[u8]) -> Result<Vec<ImageItem>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
