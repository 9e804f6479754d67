//! Error Types

use thiserror::Error;

/// Result type alias for concierge operations
pub type Result<T> = std::result::Result<T, ConciergeError>;

/// Concierge error types
#[derive(Error, Debug)]
pub enum ConciergeError {
    /// LLM provider returned an error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider answered but with no usable text
    #[error("Provider returned an empty reply")]
    EmptyReply,

    /// Parse error (malformed provider payload)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rate limited
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Authentication failed (missing or rejected API key)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl ConciergeError {
    /// Check if error is retryable
    ///
    /// The chat widget never retries on its own; this is informational for
    /// callers and logs.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable(_) | Self::RateLimited(_)
        )
    }
}
