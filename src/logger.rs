//! Logger setup
//!
//! `RUST_LOG` wins when set. Otherwise everything logs at warn and this
//! crate at info, written to stderr.

use env_logger::{Builder, Target};
use log::LevelFilter;

pub fn init() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }

    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Info)
        .init();
}
