use iced::widget::image::Handle;
use image::imageops::FilterType;

use super::client::ImageClient;
use crate::error::FetchError;

/// Longest edge of a decoded picture; anything larger is downscaled
const MAX_EDGE: u32 = 1600;

/// A downloaded picture, decoded to RGBA and ready for the image widget
#[derive(Debug, Clone)]
pub struct Picture {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

/// Download a picture and decode it off the UI thread
pub async fn fetch_picture(client: ImageClient, download_url: String) -> Result<Picture, FetchError> {
    let bytes = client.get_bytes(&download_url).await?;

    // Decoding a 5000px JPEG is CPU heavy, keep it off the async workers
    let picture = tokio::task::spawn_blocking(move || decode_picture(&bytes)).await??;

    log::debug!(
        "📸 Decoded picture {}x{} from {}",
        picture.width,
        picture.height,
        download_url
    );
    Ok(picture)
}

/// Decode encoded image bytes, downscaling to fit `MAX_EDGE`
pub fn decode_picture(bytes: &[u8]) -> Result<Picture, FetchError> {
    let mut img = image::load_from_memory(bytes)?;

    if img.width() > MAX_EDGE || img.height() > MAX_EDGE {
        // resize() keeps the aspect ratio and fits inside the box
        img = img.resize(MAX_EDGE, MAX_EDGE, FilterType::Triangle);
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Picture {
        width,
        height,
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}
