//! Image strip renderer
//!
//! `layout` is a pure function of the carousel state and the running fade;
//! `view` turns its result into widgets. All layers share one box, stacked
//! bottom to top, with the current slide last.

use std::collections::HashMap;
use std::time::Instant;

use iced::widget::{button, container, horizontal_space, image, row, text, Row, Space, Stack};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Shadow, Theme, Vector};

use super::fade::Fade;
use crate::state::data::ImageItem;
use crate::Message;

/// Size of the picture box
const STRIP_WIDTH: f32 = 640.0;
const STRIP_HEIGHT: f32 = 360.0;

/// Indicator dot diameters
const DOT_SIZE: f32 = 12.0;
const ACTIVE_DOT_SIZE: f32 = 15.0;

/// Download state of one slide's picture
#[derive(Debug, Clone)]
pub enum PictureSlot {
    Pending,
    Ready(image::Handle),
    Missing,
}

/// One image layer, in drawing order
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<'a> {
    pub item: &'a ImageItem,
    pub index: usize,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Everything the strip draws, bottom layer first
#[derive(Debug, Clone, PartialEq)]
pub struct StripModel<'a> {
    pub layers: Vec<Layer<'a>>,
    pub dots: Vec<Dot>,
}

impl<'a> StripModel<'a> {
    /// The layer drawn last, i.e. on top of all others
    #[cfg(test)]
    pub fn top(&self) -> Option<&Layer<'a>> {
        self.layers.last()
    }
}

/// Lay out the strip for `images` with `current` visible
///
/// A fade only counts if it ends on `current`; anything else is left over
/// from before a new listing and is ignored.
pub fn layout<'a>(
    images: &'a [ImageItem],
    current: usize,
    fade: Option<Fade>,
    now: Instant,
) -> StripModel<'a> {
    let fade = fade.filter(|f| f.to == current && f.from != f.to && f.from < images.len());

    let opacity = |index: usize| match fade {
        Some(f) => f.opacity(index, now),
        None if index == current => 1.0,
        None => 0.0,
    };

    let rank = |index: usize| {
        if index == current {
            2
        } else if fade.map(|f| f.from) == Some(index) {
            1
        } else {
            0
        }
    };

    let mut layers: Vec<Layer<'a>> = images
        .iter()
        .enumerate()
        .map(|(index, item)| Layer {
            item,
            index,
            opacity: opacity(index),
        })
        .collect();
    layers.sort_by_key(|layer| rank(layer.index));

    let dots = (0..images.len())
        .map(|index| Dot {
            index,
            active: index == current,
        })
        .collect();

    StripModel { layers, dots }
}

/// Build the widgets for a laid out strip
pub fn view<'a>(
    model: StripModel<'a>,
    pictures: &'a HashMap<String, PictureSlot>,
) -> Element<'a, Message> {
    let mut stack = Stack::with_children(
        model
            .layers
            .iter()
            .map(|layer| layer_view(layer, pictures.get(&layer.item.id))),
    )
    .width(Length::Fixed(STRIP_WIDTH))
    .height(Length::Fixed(STRIP_HEIGHT));

    let arrows = row![
        arrow_button("‹", Message::Previous),
        horizontal_space(),
        arrow_button("›", Message::Next),
    ]
    .align_y(Alignment::Center)
    .padding(16)
    .width(Length::Fill)
    .height(Length::Fill);

    let dots = Row::with_children(model.dots.iter().map(|dot| dot_view(*dot)))
        .spacing(8)
        .align_y(Alignment::Center);

    stack = stack.push(arrows).push(
        container(dots)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .align_bottom(Length::Fill)
            .padding(16),
    );

    container(stack)
        .style(|_theme: &Theme| container::Style {
            border: Border {
                radius: 24.0.into(),
                ..Border::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..container::Style::default()
        })
        .into()
}

fn layer_view<'a>(layer: &Layer<'a>, slot: Option<&'a PictureSlot>) -> Element<'a, Message> {
    let opacity = layer.opacity;

    match slot {
        Some(PictureSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .opacity(opacity)
            .into(),
        Some(PictureSlot::Missing) => container(
            text(format!("Image unavailable ({})", layer.item.author))
                .color(Color::from_rgba(0.85, 0.85, 0.85, opacity)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(move |_theme: &Theme| placeholder_style(opacity))
        .into(),
        Some(PictureSlot::Pending) | None => container(Space::new(Length::Fill, Length::Fill))
            .style(move |_theme: &Theme| placeholder_style(opacity))
            .into(),
    }
}

fn placeholder_style(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.25, 0.25, 0.28, opacity))),
        border: Border {
            radius: 24.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn arrow_button(label: &'static str, message: Message) -> Element<'static, Message> {
    button(text(label).size(28))
        .on_press(message)
        .padding([0, 14])
        .style(|theme: &Theme, status| {
            let mut style = button::secondary(theme, status);
            style.border.radius = 20.0.into();
            style
        })
        .into()
}

fn dot_view(dot: Dot) -> Element<'static, Message> {
    let size = if dot.active { ACTIVE_DOT_SIZE } else { DOT_SIZE };

    button(Space::new(Length::Fixed(size), Length::Fixed(size)))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .padding(0)
        .on_press(Message::Select(dot.index))
        .style(move |_theme: &Theme, status| {
            let fill = match (dot.active, status) {
                (true, _) => Color::BLACK,
                (false, button::Status::Hovered) => Color::from_rgb(0.8, 0.8, 0.8),
                (false, _) => Color::from_rgb(0.97, 0.97, 0.98),
            };
            let outline = if dot.active { Color::WHITE } else { Color::BLACK };

            button::Style {
                background: Some(Background::Color(fill)),
                border: Border {
                    color: outline,
                    width: 1.0,
                    radius: (size / 2.0).into(),
                },
                ..button::Style::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::fade::FADE_DURATION;

    fn items(count: usize) -> Vec<ImageItem> {
        (0..count).map(|i| ImageItem::sample(&i.to_string())).collect()
    }

    #[test]
    fn test_current_layer_is_opaque_and_on_top() {
        let images = items(4);
        let now = Instant::now();

        for current in 0..images.len() {
            let model = layout(&images, current, None, now);

            assert_eq!(model.layers.len(), 4);
            let top = model.top().unwrap();
            assert_eq!(top.index, current);
            assert_eq!(top.item.id, images[current].id);
            assert_eq!(top.opacity, 1.0);

            for layer in &model.layers[..3] {
                assert_eq!(layer.opacity, 0.0);
            }
        }
    }

    #[test]
    fn test_one_dot_per_image_with_current_active() {
        let images = items(3);
        let model = layout(&images, 1, None, Instant::now());

        assert_eq!(
            model.dots,
            vec![
                Dot { index: 0, active: false },
                Dot { index: 1, active: true },
                Dot { index: 2, active: false },
            ]
        );
    }

    #[test]
    fn test_empty_listing_has_no_layers_or_dots() {
        let model = layout(&[], 0, None, Instant::now());
        assert!(model.layers.is_empty());
        assert!(model.dots.is_empty());
        assert!(model.top().is_none());
    }

    #[test]
    fn test_fade_keeps_incoming_on_top() {
        let images = items(3);
        let start = Instant::now();
        let fade = Fade::new(0, 2, start);
        let middle = start + FADE_DURATION / 2;

        let model = layout(&images, 2, Some(fade), middle);

        let order: Vec<usize> = model.layers.iter().map(|l| l.index).collect();
        assert_eq!(order, vec![1, 0, 2]);

        let incoming = &model.layers[2];
        let outgoing = &model.layers[1];
        assert!(incoming.opacity > 0.0 && incoming.opacity < 1.0);
        assert!((incoming.opacity + outgoing.opacity - 1.0).abs() < 1e-6);
        assert_eq!(model.layers[0].opacity, 0.0);
    }

    #[test]
    fn test_finished_fade_matches_static_layout() {
        let images = items(3);
        let start = Instant::now();
        let end = start + FADE_DURATION;

        let faded = layout(&images, 1, Some(Fade::new(0, 1, start)), end);
        let top = faded.top().unwrap();
        assert_eq!((top.index, top.opacity), (1, 1.0));
        assert!(faded.layers[..2].iter().all(|l| l.opacity == 0.0));
    }

    #[test]
    fn test_unrelated_fade_is_ignored() {
        let images = items(2);
        let start = Instant::now();

        // Left over from a longer listing: points past the end.
        let model = layout(&images, 0, Some(Fade::new(7, 0, start)), start);
        assert_eq!(model.top().unwrap().opacity, 1.0);

        // Ends somewhere other than the current slide.
        let model = layout(&images, 0, Some(Fade::new(0, 1, start)), start);
        assert_eq!(model.top().unwrap().index, 0);
        assert_eq!(model.top().unwrap().opacity, 1.0);
    }
}
