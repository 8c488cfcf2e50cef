//! Application-level errors

use integration_wienerlinien::MonitorError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Monitor errors pass through transparently so callers keep the typed
/// taxonomy of the integration layer. Bike-share problems never appear
/// here; that source reports an empty result instead of an error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Realtime monitor error, surfaced as-is
    #[error(transparent)]
    Monitor(#[from] MonitorError),

    /// A stop id was empty or whitespace-only
    #[error("stop id must not be empty")]
    EmptyStopId,

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Check if retrying the operation could plausibly succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Monitor(e) => e.is_retryable(),
            Self::EmptyStopId | Self::Configuration(_) => false,
        }
    }
}
