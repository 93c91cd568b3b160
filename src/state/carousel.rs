//! Carousel controller
//!
//! Owns the fetch lifecycle and the slide index. It never does I/O: every
//! configuration change hands back a `FetchRequest`, and the caller reports
//! the outcome through `finish`. Outcomes for anything but the latest
//! outstanding request are dropped.

use super::config::SliderConfig;
use super::data::ImageItem;
use crate::error::FetchError;

/// Text shown while the listing is being fetched
pub const LOADING_TEXT: &str = "Loading Images...";

/// Monotonic tag attached to every listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

/// A listing fetch the caller has to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub config: SliderConfig,
}

/// Which of the three mutually exclusive views to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Loading,
    Failed(&'a str),
    Strip {
        images: &'a [ImageItem],
        current: usize,
    },
}

impl Screen<'_> {
    /// Status line for the loading and error views
    pub fn status_text(&self) -> Option<String> {
        match self {
            Screen::Loading => Some(LOADING_TEXT.to_string()),
            Screen::Failed(message) => Some(format!("Error: {}", message)),
            Screen::Strip { .. } => None,
        }
    }
}

/// Fetch-and-render state of one carousel
#[derive(Debug)]
pub struct Carousel {
    config: SliderConfig,
    images: Vec<ImageItem>,
    current_slide: usize,
    loading: bool,
    error: Option<String>,
    /// Request whose outcome is still awaited
    pending: Option<RequestId>,
    /// Request whose listing is currently displayed
    applied: Option<RequestId>,
    next_id: u64,
}

impl Carousel {
    /// Activate a carousel. Returns the initial fetch unless the URL is empty.
    pub fn new(config: SliderConfig) -> (Self, Option<FetchRequest>) {
        let mut carousel = Carousel {
            config: config.clone(),
            images: Vec::new(),
            current_slide: 0,
            loading: false,
            error: None,
            pending: None,
            applied: None,
            next_id: 0,
        };

        let request = carousel.start(config);
        (carousel, request)
    }

    /// Apply a new configuration. Identical configurations issue nothing.
    pub fn reconfigure(&mut self, config: SliderConfig) -> Option<FetchRequest> {
        if config == self.config {
            log::debug!("Configuration unchanged, no fetch issued");
            return None;
        }

        self.start(config)
    }

    fn start(&mut self, config: SliderConfig) -> Option<FetchRequest> {
        self.config = config.clone();
        self.error = None;

        if config.is_disabled() {
            log::info!("Empty URL, carousel disabled");
            self.images.clear();
            self.current_slide = 0;
            self.loading = false;
            self.pending = None;
            self.applied = None;
            return None;
        }

        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.loading = true;
        self.pending = Some(id);

        log::info!("🔍 Fetching {} ({:?})", config.listing_url(), id);

        Some(FetchRequest { id, config })
    }

    /// Report the outcome of a request. Returns false if it was stale and ignored.
    pub fn finish(&mut self, id: RequestId, result: Result<Vec<ImageItem>, FetchError>) -> bool {
        if self.pending != Some(id) {
            log::debug!("Dropping stale outcome for {:?}", id);
            return false;
        }

        self.pending = None;
        self.loading = false;

        match result {
            Ok(images) => {
                log::info!("✅ Loaded {} images ({:?})", images.len(), id);
                self.images = images;
                self.current_slide = 0;
                self.error = None;
                self.applied = Some(id);
            }
            Err(err) => {
                let message = err.message();
                log::warn!("Listing fetch failed: {}", message);
                self.error = Some(message);
            }
        }

        true
    }

    /// Whether slide interaction is currently possible
    fn interactive(&self) -> bool {
        !self.loading && self.error.is_none() && !self.images.is_empty()
    }

    /// Step back one slide, wrapping from the first to the last
    pub fn previous(&mut self) {
        if !self.interactive() {
            return;
        }

        self.current_slide = if self.current_slide == 0 {
            self.images.len() - 1
        } else {
            self.current_slide - 1
        };
    }

    /// Step forward one slide, wrapping from the last to the first
    pub fn next(&mut self) {
        if !self.interactive() {
            return;
        }

        self.current_slide = if self.current_slide == self.images.len() - 1 {
            0
        } else {
            self.current_slide + 1
        };
    }

    /// Jump straight to slide `index`; out of range indices are ignored
    pub fn select_index(&mut self, index: usize) {
        if !self.interactive() {
            return;
        }

        if index < self.images.len() {
            self.current_slide = index;
        } else {
            log::debug!("Ignoring out of range slide {}", index);
        }
    }

    /// Which view should be rendered right now
    pub fn screen(&self) -> Screen<'_> {
        if self.loading {
            return Screen::Loading;
        }

        if let Some(message) = &self.error {
            return Screen::Failed(message);
        }

        Screen::Strip {
            images: &self.images,
            current: self.current_slide,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn images(&self) -> &[ImageItem] {
        &self.images
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Request whose listing is on screen, used to tag picture downloads
    pub fn applied_request(&self) -> Option<RequestId> {
        self.applied
    }
}
