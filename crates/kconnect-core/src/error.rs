//! Error Types
//!
//! Every failure surfaced to a form is an [`ApiError`] whose `Display` is the
//! text shown to the user.

use thiserror::Error;

/// Result type alias for service calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response carrying a message
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No usable response; the message is the operation fallback
    #[error("{message}")]
    Network { message: String },
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// User-facing text
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(message)
            | ApiError::Server { message, .. }
            | ApiError::Network { message } => message,
        }
    }
}

/// Failure below the HTTP status level
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}
