//! Run configuration
//!
//! Everything the runner needs for a single invocation, assembled from the
//! CLI arguments (with environment fallback) and validated before any
//! network call.

use nbtrigger_client::{PollPolicy, RetryPolicy, TriggerError};

/// Configuration for one trigger run
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository with the notebooks to execute
    pub repo: String,

    /// Git ref to build
    pub repo_ref: String,

    /// URL of the job-trigger endpoint
    pub api_url: String,

    /// API token
    pub token: String,

    /// Directories to restrict execution to; empty runs everything
    pub notebook_dirs: Vec<String>,

    /// Poll interval, wall-clock bound, and failure tolerance
    pub poll: PollPolicy,

    /// Submission retry bound and backoff
    pub retry: RetryPolicy,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), TriggerError> {
        if self.repo.is_empty() {
            return Err(TriggerError::Configuration(
                "a target repository is required (--repo or NBTRIGGER_REPO)".to_string(),
            ));
        }

        if self.api_url.is_empty() {
            return Err(TriggerError::Configuration(
                "a trigger endpoint is required (--api-url or NBTRIGGER_API_URL)".to_string(),
            ));
        }

        if self.token.is_empty() {
            return Err(TriggerError::Configuration(
                "an API token is required (--token or NBTRIGGER_TOKEN)".to_string(),
            ));
        }

        if self.poll.interval.is_zero() {
            return Err(TriggerError::Configuration(
                "poll interval must be greater than 0".to_string(),
            ));
        }

        if self.poll.max_wait.is_zero() {
            return Err(TriggerError::Configuration(
                "max wait must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
