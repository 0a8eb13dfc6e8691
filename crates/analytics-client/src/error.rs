//! Error types for the analytics client

/// Errors that can occur when talking to the analytics API
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Non-2xx HTTP response from the API
    #[error("{message}")]
    Api { message: String, status: u16 },

    /// Response body was not valid JSON for the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network-level failure (connect, DNS, reading the body)
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status code, when the error came from a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for analytics client operations
pub type Result<T> = std::result::Result<T, ClientError>;
