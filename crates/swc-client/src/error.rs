//! Error types for the SWC client SDK.

/// Errors that can occur when using the SWC client.
#[derive(Debug, thiserror::Error)]
pub enum SwcError {
    /// Network exchange failed (connection, timeout, DNS)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// Completed HTTP exchange with a non-success status
    #[error("status error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, or the canonical status text when the body
        /// could not be read
        message: String,
    },

    /// Success response whose body could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SwcError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl SwcError {
    /// Returns the HTTP status code for status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            SwcError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for transport-class failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, SwcError::Transport(_))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, SwcError>;
