//! Error types for the trigger client

use std::time::Duration;

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, TriggerError>;

/// Errors that can occur while triggering or watching a job
#[derive(Debug, Error)]
pub enum TriggerError {
    /// Required configuration is missing or invalid
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Every submission attempt failed
    #[error("job submission failed after {attempts} attempt(s): {message}")]
    Submission { attempts: u32, message: String },

    /// Well-formed response missing an expected field
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Too many consecutive status-poll failures
    #[error("polling failed after {failures} consecutive error(s): {message}")]
    Poll { failures: u32, message: String },

    /// The job did not reach a terminal state within the wall-clock bound
    #[error("timed out after {}s waiting for the job to stop", .0.as_secs())]
    Timeout(Duration),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl TriggerError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
