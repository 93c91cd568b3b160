//! User interface module
//!
//! - Cross-fade timing between slides (fade.rs)
//! - Image layers, arrows and indicator dots (strip.rs)
//!
//! `carousel_view` picks between the loading, error and strip views.

pub mod fade;
pub mod strip;

use std::collections::HashMap;
use std::time::Instant;

use iced::widget::{container, text};
use iced::{Element, Length};

use crate::state::carousel::{Carousel, Screen};
use crate::Message;
use fade::Fade;
use strip::PictureSlot;

/// Render whichever of the three carousel views applies
pub fn carousel_view<'a>(
    carousel: &'a Carousel,
    fade: Option<Fade>,
    now: Instant,
    pictures: &'a HashMap<String, PictureSlot>,
) -> Element<'a, Message> {
    let screen = carousel.screen();

    match screen {
        Screen::Loading => container(text(screen.status_text().unwrap_or_default()).size(18))
            .padding(40)
            .into(),
        Screen::Failed(_) => container(
            text(screen.status_text().unwrap_or_default())
                .size(18)
                .style(text::danger),
        )
        .padding(40)
        .width(Length::Shrink)
        .into(),
        Screen::Strip { images, current } => {
            strip::view(strip::layout(images, current, fade, now), pictures)
        }
    }
}
