//! Job tracking and status types

use std::fmt;

use serde::Deserialize;

/// Tracking URL for a submitted job
///
/// Extracted from the `Location` header of the trigger response and used
/// verbatim for every subsequent status poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latest observed state of a submitted job
///
/// Re-fetched on every poll; only the most recent value is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct JobStatus {
    pub status: String,
    pub exit_code: Option<i32>,
    #[serde(default)]
    pub logs: Vec<String>,
}

/// Coarse lifecycle phase derived from the raw status string
///
/// The service reports status as free-form text. "stopped" is the normal
/// terminal state; "failed" and "error" are explicit failure terminals.
/// Anything else is assumed to still be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    Running,
    Stopped,
    Failed,
}

impl JobStatus {
    pub fn phase(&self) -> JobPhase {
        match self.status.as_str() {
            "stopped" => JobPhase::Stopped,
            "failed" | "error" => JobPhase::Failed,
            _ => JobPhase::Running,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase() != JobPhase::Running
    }
}
