//! AI client error types.

use thiserror::Error;

/// AI client errors. None of these reach the advisor's callers; they are
/// logged and replaced by fallback content.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// No usable API key is configured for the provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// The provider rejected the configured key.
    #[error("API key rejected by provider {0}")]
    InvalidApiKey(String),

    /// Quota or rate limit exhausted.
    #[error("Quota exceeded for provider {0}")]
    QuotaExceeded(String),

    /// Transport failure (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Provider returned an error status.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Response could not be parsed or carried no text.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Error code for programmatic handling.
impl AiError {
    pub fn code(&self) -> &'static str {
        match self {
            AiError::InvalidInput(_) => "INVALID_INPUT",
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::InvalidApiKey(_) => "INVALID_API_KEY",
            AiError::QuotaExceeded(_) => "QUOTA_EXCEEDED",
            AiError::Network(_) => "NETWORK_ERROR",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// The request URL is stripped from the message before it can be logged.
impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            AiError::MalformedResponse(err.to_string())
        } else {
            AiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AiError {
    fn from(err: serde_json::Error) -> Self {
        AiError::MalformedResponse(err.to_string())
    }
}
