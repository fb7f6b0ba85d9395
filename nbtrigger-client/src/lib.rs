//! Nbtrigger HTTP Client
//!
//! Client for the remote notebook-execution service: submits a Papermill
//! job and polls its tracking URL until the job stops.
//!
//! # Example
//!
//! ```no_run
//! use nbtrigger_client::{JobClient, PollPolicy, RetryPolicy};
//! use nbtrigger_core::request::JobRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JobClient::new("https://notebooks.example.org/api/v1/trigger", "s3cret");
//!
//!     let request = JobRequest::new("org/repo", "HEAD", Vec::new());
//!     let handle = client.submit(&request, &RetryPolicy::default()).await?;
//!
//!     let status = client.wait_until_stopped(&handle, &PollPolicy::default()).await?;
//!     println!("job stopped: exit_code={:?}", status.exit_code);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod poll;

// Re-export commonly used types
pub use error::{Result, TriggerError};
pub use poll::{PollPolicy, RetryPolicy};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the notebook-execution service
///
/// Holds the trigger endpoint, the API token, and the underlying HTTP
/// client. All requests carry a `token`-scheme authorization header.
#[derive(Debug, Clone)]
pub struct JobClient {
    /// Trigger endpoint the job request is POSTed to
    api_url: String,
    /// API token, sent as `Authorization: token <token>`
    token: String,
    /// HTTP client instance
    client: Client,
}

impl JobClient {
    /// Create a new client for the given trigger endpoint
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Create a client with a custom HTTP client
    ///
    /// Allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the trigger endpoint URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(crate) fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }

    /// Check the status code and deserialize the JSON body
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TriggerError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| TriggerError::Parse(format!("failed to parse JSON response: {}", e)))
    }
}
