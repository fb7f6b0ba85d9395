//! Poll loop and its tunables
//!
//! Status is fetched strictly sequentially: sleep one interval, issue one
//! GET, repeat. Both policies are plain values passed in by the caller so
//! tests can run with millisecond intervals.

use std::time::Duration;

use tokio::time;
use tracing::{debug, warn};

use crate::JobClient;
use crate::error::{Result, TriggerError};
use nbtrigger_core::job::{JobHandle, JobStatus};

/// Retry bound and backoff for job submission
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum submission attempts
    pub attempts: u32,
    /// Fixed delay between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Tunables for the status poll loop
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Delay before each status fetch
    pub interval: Duration,
    /// Wall-clock bound on total waiting
    pub max_wait: Duration,
    /// Consecutive fetch failures tolerated before aborting
    pub max_consecutive_failures: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_wait: Duration::from_secs(3600),
            max_consecutive_failures: 5,
        }
    }
}

impl JobClient {
    /// Poll the job until it reaches a terminal state
    ///
    /// Waits `policy.interval` between fetches. Transient fetch failures are
    /// tolerated up to `policy.max_consecutive_failures` in a row; a
    /// successful fetch resets the counter. The whole wait is bounded by
    /// `policy.max_wait` regardless of transient failures.
    ///
    /// # Returns
    /// The terminal [`JobStatus`] (phase Stopped or Failed)
    pub async fn wait_until_stopped(
        &self,
        handle: &JobHandle,
        policy: &PollPolicy,
    ) -> Result<JobStatus> {
        match time::timeout(policy.max_wait, self.poll_until_terminal(handle, policy)).await {
            Ok(result) => result,
            Err(_) => Err(TriggerError::Timeout(policy.max_wait)),
        }
    }

    async fn poll_until_terminal(
        &self,
        handle: &JobHandle,
        policy: &PollPolicy,
    ) -> Result<JobStatus> {
        let mut consecutive_failures = 0u32;

        loop {
            time::sleep(policy.interval).await;

            match self.job_status(handle).await {
                Ok(status) => {
                    consecutive_failures = 0;
                    debug!(status = %status.status, "polled job");

                    if status.is_terminal() {
                        return Ok(status);
                    }
                }
                Err(e) => {
                    consecutive_failures += 1;
                    warn!(
                        "status poll failed ({}/{}): {}",
                        consecutive_failures, policy.max_consecutive_failures, e
                    );

                    if consecutive_failures >= policy.max_consecutive_failures {
                        return Err(TriggerError::Poll {
                            failures: consecutive_failures,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }
    }
}
