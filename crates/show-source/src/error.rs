//! Source error types.
//!
//! No [`SourceError`] ever escapes the resolution orchestrator: every
//! failing source is recovered locally by advancing to the next fallback
//! tier. The variants exist so each tier can log precisely what went wrong.

use thiserror::Error;

/// Errors that can occur while loading projects from a single source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error (DNS, connect, timeout, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The endpoint returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Filesystem error while reading a cache or project file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a cache snapshot or project file.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML in a project file.
    #[error("TOML parse error: {0}")]
    Toml(#[from] Box<toml::de::Error>),
}
