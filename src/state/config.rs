//! Slider configuration
//!
//! The same struct is produced by the command line parser at startup and
//! edited at runtime from the toolbar.

use clap::Parser;

/// Listing endpoint used when nothing else is given
pub const DEFAULT_URL: &str = "https://picsum.photos/v2/list";

/// Page size used by `SliderConfig::new`
pub const DEFAULT_LIMIT: u32 = 5;

/// First page of the listing
pub const DEFAULT_PAGE: u32 = 1;

/// What the carousel fetches: one page of a listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderConfig {
    /// Base URL of the listing endpoint; empty disables fetching
    pub url: String,
    /// Number of images per page
    pub limit: u32,
    /// Page number, starting at 1
    pub page: u32,
}

impl SliderConfig {
    /// Configuration for `url` with the default page size and first page
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// True when the URL is empty and nothing should be fetched
    pub fn is_disabled(&self) -> bool {
        self.url.is_empty()
    }

    /// Full listing URL: `{url}?page={page}&limit={limit}`
    pub fn listing_url(&self) -> String {
        format!("{}?page={}&limit={}", self.url, self.page, self.limit)
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "image-slider", version, about = "Browse a paginated photo listing")]
pub struct Args {
    /// Listing endpoint returning a JSON array of images (empty disables fetching)
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Number of images per page
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Page to start on
    #[arg(long, default_value_t = DEFAULT_PAGE, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

impl From<Args> for SliderConfig {
    fn from(args: Args) -> Self {
        SliderConfig::new(args.url.trim())
            .with_limit(args.limit)
            .with_page(args.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SliderConfig::new("https://picsum.photos/v2/list");
        assert_eq!(config.limit, 5);
        assert_eq!(config.page, 1);
        assert!(!config.is_disabled());
    }

    #[test]
    fn test_listing_url() {
        let config = SliderConfig::new("https://picsum.photos/v2/list")
            .with_limit(2)
            .with_page(3);
        assert_eq!(
            config.listing_url(),
            "https://picsum.photos/v2/list?page=3&limit=2"
        );
    }

    #[test]
    fn test_zero_values_are_raised_to_one() {
        let config = SliderConfig::new("http://x").with_limit(0).with_page(0);
        assert_eq!((config.limit, config.page), (1, 1));
    }

    #[test]
    fn test_empty_url_is_disabled() {
        assert!(SliderConfig::new("").is_disabled());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["image-slider"]).unwrap();
        let config = SliderConfig::from(args);
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.limit, 10);
        assert_eq!(config.page, 1);
    }

    #[test]
    fn test_args_override() {
        let args = Args::try_parse_from([
            "image-slider",
            "--url",
            "http://localhost:8080/list",
            "--limit",
            "3",
            "--page",
            "7",
        ])
        .unwrap();
        let config = SliderConfig::from(args);
        assert_eq!(config.listing_url(), "http://localhost:8080/list?page=7&limit=3");
    }

    #[test]
    fn test_args_reject_zero_limit() {
        assert!(Args::try_parse_from(["image-slider", "--limit", "0"]).is_err());
    }

    #[test]
    fn test_args_blank_url_is_disabled() {
        let args = Args::try_parse_from(["image-slider", "--url", "  "]).unwrap();
        let config = SliderConfig::from(args);
        assert_eq!(config.url, "");
        assert!(config.is_disabled());
    }

    #[test]
    fn test_args_url_is_trimmed() {
        let args = Args::try_parse_from(["image-slider", "--url", " http://x/list "]).unwrap();
        assert_eq!(SliderConfig::from(args).listing_url(), "http://x/list?page=1&limit=10");
    }

    #[test]
    fn test_args_accept_empty_url() {
        let args = Args::try_parse_from(["image-slider", "--url", ""]).unwrap();
        assert!(SliderConfig::from(args).is_disabled());
    }
}
