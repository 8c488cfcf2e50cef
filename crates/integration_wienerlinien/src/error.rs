//! Monitor error types

use thiserror::Error;

/// Errors that can occur while fetching or decoding realtime monitor data
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The monitor API answered with a non-200 status
    #[error("monitor request failed with HTTP {code}")]
    HttpStatus {
        /// HTTP status code as returned by the API
        code: u16,
    },

    /// The response body is not the expected monitor payload
    #[error("invalid monitor payload: {0}")]
    InvalidPayload(String),

    /// The payload is valid JSON but carries no `monitors` collection
    #[error("no monitor data in response")]
    NoMonitors,

    /// A required field is absent from an otherwise valid payload
    #[error("monitor response is missing the `{0}` field")]
    MissingField(&'static str),

    /// Connection to the monitor API failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl MonitorError {
    /// Returns true if a retry could plausibly succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } => true,
            Self::HttpStatus { code } => *code >= 500,
            Self::InvalidPayload(_) | Self::NoMonitors | Self::MissingField(_) => false,
        }
    }
}
