//! Media controls core of the VR browser.
//!
//! The engine owns the media element; [`media::Media`] mirrors its state for
//! the UI, [`ui::MediaControls`] renders it, and the `search` module builds
//! search and suggestion requests for the URL bar.

pub mod config;
pub mod media;
pub mod search;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use utils::{AppError, format_time, init_tracing};
