pub mod client;
pub mod engine;
pub mod registry;
pub mod suggestions;

use thiserror::Error;

pub use client::SuggestionsClient;
pub use engine::{SEARCH_TERMS, SearchEngine, encode_query};
pub use registry::{DEFAULT_REGION_OVERRIDES, SearchEngineRegistry};
pub use suggestions::{parse_suggestions, parse_suggestions_value};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("No search engines configured")]
    NoEngines,

    #[error("Unknown search engine: {0}")]
    UnknownEngine(String),

    #[error("Invalid search URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Suggestions request failed: {0}")]
    Http(#[from] reqwest::Error),
}
