//! Single-run workflow
//!
//! Submit the job, wait for it to stop, interpret the result, and report
//! it. The returned code becomes the process exit status.

use anyhow::Result;
use colored::*;
use tracing::info;

use crate::config::Config;
use crate::output;
use nbtrigger_client::JobClient;
use nbtrigger_core::logs;
use nbtrigger_core::request::JobRequest;

pub async fn run(config: &Config) -> Result<u8> {
    let client = JobClient::new(&config.api_url, &config.token);
    let request = JobRequest::new(&config.repo, &config.repo_ref, config.notebook_dirs.clone());

    println!(
        "{} {} ({})",
        "Submitting job for".bold(),
        config.repo.cyan(),
        config.repo_ref
    );
    let handle = client.submit(&request, &config.retry).await?;
    println!("Job accepted: {}", handle.to_string().dimmed());

    info!(
        interval = config.poll.interval.as_secs(),
        max_wait = config.poll.max_wait.as_secs(),
        "waiting for job to stop"
    );
    let status = client.wait_until_stopped(&handle, &config.poll).await?;
    info!(status = %status.status, "job reached a terminal state");

    let report = logs::interpret(&status);
    output::print_report(&report);

    Ok(report.process_exit_code())
}
