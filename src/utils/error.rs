use thiserror::Error;

/// Every failure the SDK can produce. A call either fully succeeds or fails
/// with exactly one of these; nothing is retried internally.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ad engine returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid configuration: {field}: {reason}")]
    Config { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TransportError>;
