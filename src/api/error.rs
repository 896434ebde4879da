//! Errors raised while fetching users.

/// Errors that can occur while fetching and decoding the users list.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Transport failure or timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The payload did not match the expected user schema.
    #[error("Response does not match the user schema: {0}")]
    Decode(#[from] serde_json::Error),

    /// The async runtime backing the client could not start.
    #[error("Failed to start HTTP runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl ApiError {
    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
