//! Errors raised while resolving a news stream.
//!
//! Only the non-retrying strategies (JSON chain, HTML scrape) surface these to
//! the caller. An unmatched request or an exhausted hourly probe window is a
//! normal `Ok(None)`, not an error.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing JSON field: {0}")]
    MissingField(&'static str),

    #[error("missing HTML element: {0}")]
    MissingElement(&'static str),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("feed error: {0}")]
    Feed(String),

    #[error("resolution timed out after {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
