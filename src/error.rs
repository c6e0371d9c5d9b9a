//! Error types.
//!
//! None of these ever escape [`Model::update`](crate::autocomplete::Model::update):
//! a failed remote fetch is logged and treated as zero additional candidates.
//! They are returned by the lower-level helpers so callers that use them
//! directly can tell what went wrong.

use thiserror::Error;

/// Errors produced while loading configuration or fetching candidates.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote source answered with something other than 200.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body was not a JSON array of strings.
    #[error("invalid candidate list: {0}")]
    Decode(#[source] serde_json::Error),

    /// The JSON configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
