use thiserror::Error;

/// Errors that can occur while talking to the recipe service
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Request could not be sent or the body could not be read
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    StatusError { status: u16, url: String },

    /// Response body was not the expected JSON envelope
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Lookup returned no record for the identifier
    #[error("No recipe found for id {0}")]
    MissingRecord(String),

    /// Record is missing its identifier or name
    #[error("Malformed recipe record: {0}")]
    MalformedRecord(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
