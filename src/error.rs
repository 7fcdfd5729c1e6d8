use thiserror::Error;

/// Unified error type for the crate.
///
/// Every variant here is fatal to a batch query: either the options were
/// unusable before any request was dispatched, or the fetch mechanism itself
/// failed mid-batch. Per-username lookup failures are not errors; they are
/// recorded as data in the report's failure map and the batch continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    /// A response that carried no rate-limit headers. Such a response cannot
    /// be accounted against the batch and signals the endpoint is unusable.
    #[error("Remote error: HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }
}
