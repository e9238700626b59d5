//! Transport error definitions.

use thiserror::Error;

/// Errors that can occur while talking to the API.
///
/// These never cross the service boundary as `Err`; their `Display` text is
/// what ends up in [`ApiResponse::error`](crate::http::ApiResponse).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (DNS, refused connection, timeout...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The body could not be decoded into the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Base URL and path did not form a valid URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
