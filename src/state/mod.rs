/// State management module
///
/// This module handles all carousel state, including:
/// - Listing entries fetched from the API (data.rs)
/// - Slider configuration and command line parsing (config.rs)
/// - The fetch lifecycle and slide index state machine (carousel.rs)

pub mod carousel;
pub mod config;
pub mod data;
