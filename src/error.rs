//! Error types for the content client and rasterizer

use std::io;
use thiserror::Error;

/// Result type alias for foliokit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching content or rasterizing documents
#[derive(Error, Debug)]
pub enum Error {
    /// The content API answered with a non-success status
    #[error("content request failed with status {status}")]
    RequestFailed {
        /// HTTP status code returned by the server
        status: u16,
    },

    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The PDF source was empty, unreadable, or failed to parse
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A page failed mid-render; earlier pages remain valid
    #[error("failed to render page {page}: {reason}")]
    PageRenderFailed {
        /// 1-based page number that failed
        page: u32,
        /// Backend-reported failure reason
        reason: String,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Error::RequestFailed {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}
