//! Error types for the ONTRAPORT client.

use thiserror::Error;

use crate::wire::WireError;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the ONTRAPORT API.
#[derive(Debug, Error)]
pub enum Error {
    /// Application id or API key missing. Raised before any request is sent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The API answered with a non-200 status code.
    #[error("API responded with status code: {status}")]
    Transport { status: u16 },

    /// The response body was not a valid document, or carried an `<error>` element.
    #[error("API failure: {0}")]
    Protocol(String),

    /// An entity-scoped operation was invoked on an entity missing required state.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// A request payload could not be written as XML.
    #[error("failed to serialize request: {0}")]
    Serialize(#[from] WireError),

    /// Socket-level failure reported by the HTTP transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A configuration file could not be read, parsed or written.
    #[error("config file error: {0}")]
    Config(String),
}

impl Error {
    /// True for the errors raised before any network call was attempted.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
