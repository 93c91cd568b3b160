use clap::Parser;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};
use std::collections::HashMap;
use std::time::Instant;

mod error;
mod logger;
mod net;
mod state;
mod ui;

use error::FetchError;
use net::{ImageClient, Picture};
use state::carousel::{Carousel, FetchRequest, RequestId};
use state::config::{Args, SliderConfig};
use state::data::ImageItem;
use ui::fade::Fade;
use ui::strip::PictureSlot;

const DESCRIPTION: &str =
    "Browse through a collection of high-quality images using the navigation controls.";

/// Main application state
struct ImageSlider {
    /// Shared HTTP client for the listing and the pictures
    client: ImageClient,
    /// Fetch lifecycle and slide index
    carousel: Carousel,
    /// Downloaded pictures of the listing on screen, keyed by image id
    pictures: HashMap<String, PictureSlot>,
    /// Cross-fade in progress, if any
    fade: Option<Fade>,
    /// Timestamp of the last rendered frame
    now: Instant,
    /// URL text box contents, applied on Enter
    url_input: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A listing request finished
    ListingLoaded(RequestId, Result<Vec<ImageItem>, FetchError>),
    /// A picture download finished (listing request, image id, result)
    PictureLoaded(RequestId, String, Result<Picture, FetchError>),
    /// Left arrow clicked or pressed
    Previous,
    /// Right arrow clicked or pressed
    Next,
    /// Indicator dot clicked
    Select(usize),
    /// Frame tick while a cross-fade runs
    Tick(Instant),
    UrlEdited(String),
    UrlSubmitted,
    PageChanged(u32),
}

impl ImageSlider {
    /// Create the application and kick off the first fetch
    fn new(client: ImageClient, config: SliderConfig) -> (Self, Task<Message>) {
        let url_input = config.url.clone();
        let (carousel, request) = Carousel::new(config);

        let app = ImageSlider {
            client,
            carousel,
            pictures: HashMap::new(),
            fade: None,
            now: Instant::now(),
            url_input,
        };

        let task = app.fetch_listing(request);
        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ListingLoaded(id, result) => {
                if !self.carousel.finish(id, result) || self.carousel.error().is_some() {
                    return Task::none();
                }

                // New listing on screen: old pictures and fades are meaningless now
                self.fade = None;
                self.pictures.clear();
                self.fetch_pictures(id)
            }
            Message::PictureLoaded(id, image_id, result) => {
                if self.carousel.applied_request() != Some(id) {
                    log::debug!("Dropping picture {} from stale listing {:?}", image_id, id);
                    return Task::none();
                }

                let slot = match result {
                    Ok(picture) => PictureSlot::Ready(picture.handle),
                    Err(err) => {
                        log::warn!("⚠️  Picture {} failed: {}", image_id, err.message());
                        PictureSlot::Missing
                    }
                };
                self.pictures.insert(image_id, slot);

                Task::none()
            }
            Message::Previous => {
                self.change_slide(Carousel::previous);
                Task::none()
            }
            Message::Next => {
                self.change_slide(Carousel::next);
                Task::none()
            }
            Message::Select(index) => {
                self.change_slide(|carousel| carousel.select_index(index));
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                if self.fade.is_some_and(|fade| fade.is_finished(now)) {
                    self.fade = None;
                }
                Task::none()
            }
            Message::UrlEdited(url) => {
                self.url_input = url;
                Task::none()
            }
            Message::UrlSubmitted => {
                let mut config = self.carousel.config().clone();
                config.url = self.url_input.trim().to_string();
                self.apply_config(config)
            }
            Message::PageChanged(page) => {
                let config = self.carousel.config().clone().with_page(page);
                self.apply_config(config)
            }
        }
    }

    /// Run a slide change and start a cross-fade if the index moved
    fn change_slide(&mut self, change: impl FnOnce(&mut Carousel)) {
        let before = self.carousel.current_slide();
        change(&mut self.carousel);
        let after = self.carousel.current_slide();

        if before != after {
            self.now = Instant::now();
            self.fade = Some(Fade::new(before, after, self.now));
        }
    }

    fn apply_config(&mut self, config: SliderConfig) -> Task<Message> {
        let request = self.carousel.reconfigure(config);

        if self.carousel.applied_request().is_none() {
            self.pictures.clear();
            self.fade = None;
        }

        self.fetch_listing(request)
    }

    fn fetch_listing(&self, request: Option<FetchRequest>) -> Task<Message> {
        let Some(FetchRequest { id, config }) = request else {
            return Task::none();
        };

        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_page(&config).await },
            move |result| Message::ListingLoaded(id, result),
        )
    }

    /// Start one download per image of the listing applied by `id`
    fn fetch_pictures(&mut self, id: RequestId) -> Task<Message> {
        let mut tasks = Vec::with_capacity(self.carousel.images().len());

        for item in self.carousel.images() {
            self.pictures.insert(item.id.clone(), PictureSlot::Pending);

            let image_id = item.id.clone();
            tasks.push(Task::perform(
                net::picture::fetch_picture(self.client.clone(), item.download_url.clone()),
                move |result| Message::PictureLoaded(id, image_id.clone(), result),
            ));
        }

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let page = self.carousel.config().page;

        let toolbar = row![
            text_input("Listing URL", &self.url_input)
                .on_input(Message::UrlEdited)
                .on_submit(Message::UrlSubmitted)
                .padding(8)
                .width(Length::Fixed(420.0)),
            button(text("-"))
                .on_press_maybe((page > 1).then(|| Message::PageChanged(page - 1))),
            text(format!("Page {}", page)),
            button(text("+")).on_press(Message::PageChanged(page.saturating_add(1))),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let content: Column<Message> = column![
            text("Image Slider").size(36),
            text(DESCRIPTION).size(16),
            toolbar,
            ui::carousel_view(&self.carousel, self.fade, self.now, &self.pictures),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Arrow keys always, frame ticks only while fading
    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::ArrowLeft) => Some(Message::Previous),
            Key::Named(Named::ArrowRight) => Some(Message::Next),
            _ => None,
        });

        if self.fade.is_some() {
            Subscription::batch([keys, window::frames().map(Message::Tick)])
        } else {
            keys
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    logger::init();

    let config = SliderConfig::from(Args::parse());

    let client = match ImageClient::new() {
        Ok(client) => client,
        Err(err) => {
            log::error!("Failed to create HTTP client: {}", err.message());
            std::process::exit(1);
        }
    };

    log::info!(
        "🎨 Image Slider starting on {} (page {}, limit {})",
        if config.is_disabled() { "<disabled>" } else { config.url.as_str() },
        config.page,
        config.limit
    );

    iced::application("Image Slider", ImageSlider::update, ImageSlider::view)
        .subscription(ImageSlider::subscription)
        .theme(ImageSlider::theme)
        .window_size((900.0, 720.0))
        .centered()
        .run_with(move || ImageSlider::new(client, config))
}
