//! Error types for the ReviewKita client core.

use thiserror::Error;

/// Result type alias using the ReviewKita client Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ReviewKita client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/network request failed before a response was produced
    #[error("Request error: {0}")]
    Request(String),

    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message taken from the response body, or the status text.
        message: String,
    },

    /// HTTP 401 observed: credentials were cleared, caller must re-login
    #[error("Session expired: credentials cleared, redirect to login")]
    SessionExpired,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Search operation failed
    #[error("Search error: {0}")]
    Search(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
