//! Console rendering

use colored::*;

use nbtrigger_core::logs::JobReport;

/// Print the job's logs and outcome
///
/// Logs are wrapped in a delimited block. Each failed notebook from a
/// structured result gets a CI annotation line with its captured stdout, so
/// the failure is visible in the pipeline summary without opening the full
/// log.
pub fn print_report(report: &JobReport) {
    println!("{}", "Job logs:".bold());
    println!("{}", "─".repeat(80).dimmed());
    println!("{}", report.rendered_logs);
    println!("{}", "─".repeat(80).dimmed());

    for nb in &report.failed_notebooks {
        println!(
            "::error::notebook {} exited with code {}",
            nb.notebook, nb.exit_code
        );
        if !nb.stdout.is_empty() {
            println!("{}", nb.stdout);
        }
    }

    if report.exit_code == 0 {
        println!("{}", "Job finished successfully.".green());
    } else {
        println!(
            "{}",
            format!("Job failed with exit code {}.", report.exit_code).red()
        );
    }
}
