/// Network access module
///
/// This module handles:
/// - Fetching listing pages from the API (client.rs)
/// - Downloading and decoding the pictures themselves (picture.rs)

pub mod client;
pub mod picture;

pub use client::ImageClient;
pub use picture::Picture;
