// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectorError>;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Collection API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed payload: {0}")]
    Payload(String),
}

impl CollectorError {
    /// Transport, status and decode failures all collapse into "fetch failed".
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            CollectorError::Request(_) | CollectorError::Status { .. } | CollectorError::Payload(_)
        )
    }
}

impl From<reqwest::Error> for CollectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CollectorError::Payload(err.to_string())
        } else {
            CollectorError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CollectorError {
    fn from(err: serde_json::Error) -> Self {
        CollectorError::Payload(err.to_string())
    }
}
