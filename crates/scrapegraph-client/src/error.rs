//! Error types for ScrapeGraph API calls

use thiserror::Error;

/// ScrapeGraph client errors
///
/// The remote API's error bodies are not contractually documented, so the
/// body of a non-200 response is carried as opaque text. 401, 402 and 429
/// all land in [`ScrapeGraphError::Api`] unchanged.
#[derive(Debug, Error)]
pub enum ScrapeGraphError {
    /// The API answered with a status other than `200 OK`
    #[error("Error {status}: {body}")]
    Api {
        /// Numeric HTTP status
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// Connection, TLS or timeout failure before a status was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Caller-supplied arguments could not be turned into a request
    #[error("{0}")]
    InvalidArgument(String),

    /// A `200 OK` response whose body is not JSON
    #[error("Invalid JSON in response (status {status}): {source}")]
    Decode {
        /// Numeric HTTP status
        status: u16,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

impl ScrapeGraphError {
    /// Shorthand for [`ScrapeGraphError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ScrapeGraphError>;
