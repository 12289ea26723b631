//! Error types for the Solace client

use solace_core::domain::task::TaskId;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Solace client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: the request could not complete
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse a response body
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The backend reported the task as failed
    #[error("task {0} failed")]
    TaskFailed(TaskId),

    /// The poll budget ran out while the task was still pending
    #[error("task {task} still pending after {waited:?}")]
    TimedOut {
        /// The abandoned task
        task: TaskId,
        /// Total wait budget that was exhausted
        waited: Duration,
    },

    /// The caller abandoned the poll via its cancel handle
    #[error("polling for task {0} was cancelled")]
    Cancelled(TaskId),

    /// The backend rejected the configured upstream API key
    ///
    /// Expected and recoverable: the user fixes it by submitting a valid key,
    /// so callers should surface this as guidance rather than a failure.
    #[error("the configured API key is invalid")]
    InvalidApiKey,
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error should be shown to the user as a configuration
    /// notice instead of a failure
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidApiKey)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}
