//! Nbtrigger CLI
//!
//! Triggers a Papermill job on a remote notebook-execution service, waits
//! for it to stop, and exits with the job's outcome so CI pipelines can
//! gate on it.

mod config;
mod output;
mod runner;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use nbtrigger_client::{PollPolicy, RetryPolicy};
use nbtrigger_core::request::parse_notebook_dirs;

#[derive(Parser)]
#[command(name = "nbtrigger")]
#[command(about = "Trigger a remote notebook-execution job and wait for the result", long_about = None)]
struct Cli {
    /// Repository with the notebooks to execute (e.g. "org/repo")
    #[arg(long, env = "NBTRIGGER_REPO")]
    repo: Option<String>,

    /// Git ref to build
    #[arg(long = "ref", env = "NBTRIGGER_REF", default_value = "HEAD")]
    repo_ref: String,

    /// URL of the job-trigger endpoint
    #[arg(long, env = "NBTRIGGER_API_URL")]
    api_url: Option<String>,

    /// API token
    #[arg(long, env = "NBTRIGGER_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Notebook directories, as a JSON array or comma-separated list
    #[arg(long, env = "NBTRIGGER_NOTEBOOK_DIRS")]
    notebook_dirs: Option<String>,

    /// Seconds between status polls
    #[arg(long, env = "NBTRIGGER_POLL_INTERVAL", default_value_t = 10)]
    poll_interval: u64,

    /// Maximum seconds to wait for the job to stop
    #[arg(long, env = "NBTRIGGER_MAX_WAIT", default_value_t = 3600)]
    max_wait: u64,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nbtrigger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        repo: cli.repo.unwrap_or_default(),
        repo_ref: cli.repo_ref,
        api_url: cli.api_url.unwrap_or_default(),
        token: cli.token.unwrap_or_default(),
        notebook_dirs: parse_notebook_dirs(cli.notebook_dirs.as_deref().unwrap_or("")),
        poll: PollPolicy {
            interval: Duration::from_secs(cli.poll_interval),
            max_wait: Duration::from_secs(cli.max_wait),
            ..PollPolicy::default()
        },
        retry: RetryPolicy::default(),
    };

    // Fails before any network call when required inputs are missing
    config.validate()?;

    let code = runner::run(&config).await?;
    Ok(ExitCode::from(code))
}
