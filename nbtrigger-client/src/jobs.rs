//! Job submission and status endpoints

use reqwest::header::{AUTHORIZATION, LOCATION};
use tokio::time;
use tracing::{debug, warn};

use crate::JobClient;
use crate::error::{Result, TriggerError};
use crate::poll::RetryPolicy;
use nbtrigger_core::job::{JobHandle, JobStatus};
use nbtrigger_core::request::JobRequest;

impl JobClient {
    /// Submit a job-execution request
    ///
    /// POSTs the request to the trigger endpoint, retrying transport
    /// failures and error responses up to `retry.attempts` with a fixed
    /// backoff between tries. A success response without a `Location`
    /// header is a protocol failure and is never retried.
    ///
    /// # Arguments
    /// * `request` - The job request payload
    /// * `retry` - Attempt bound and backoff for transient failures
    ///
    /// # Returns
    /// The tracking handle from the response's `Location` header
    pub async fn submit(&self, request: &JobRequest, retry: &RetryPolicy) -> Result<JobHandle> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.try_submit(request).await {
                Ok(response) => {
                    let location = response
                        .headers()
                        .get(LOCATION)
                        .and_then(|v| v.to_str().ok())
                        .ok_or_else(|| {
                            TriggerError::Protocol(
                                "trigger response has no Location header".to_string(),
                            )
                        })?;

                    debug!(location, "job submitted");
                    return Ok(JobHandle::new(location));
                }
                Err(e) if attempt < retry.attempts => {
                    warn!(
                        "submission attempt {}/{} failed: {}",
                        attempt, retry.attempts, e
                    );
                    time::sleep(retry.backoff).await;
                }
                Err(e) => {
                    return Err(TriggerError::Submission {
                        attempts: attempt,
                        message: e.to_string(),
                    });
                }
            }
        }
    }

    async fn try_submit(&self, request: &JobRequest) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, self.auth_header())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TriggerError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }

    /// Fetch the current status of a submitted job
    ///
    /// # Arguments
    /// * `handle` - The tracking handle returned by [`JobClient::submit`]
    pub async fn job_status(&self, handle: &JobHandle) -> Result<JobStatus> {
        let response = self
            .client
            .get(handle.url())
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        self.handle_response(response).await
    }
}
