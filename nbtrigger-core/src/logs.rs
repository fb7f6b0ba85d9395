//! Log reconciliation
//!
//! The execution service returns job logs as a list of lines. Depending on
//! the notebook runner's version these either concatenate into a structured
//! JSON document (with an authoritative exit code and per-notebook results)
//! or into plain text whose newlines arrive as literal `\n` sequences.
//! Interpretation reconciles both shapes into a single [`JobReport`].

use serde::Deserialize;
use serde_json::Value;

use crate::job::JobStatus;

/// Per-notebook outcome carried inside structured logs
#[derive(Debug, Clone, Deserialize)]
pub struct NotebookResult {
    pub notebook: String,
    #[serde(rename = "exitCode", default)]
    pub exit_code: i32,
    #[serde(default)]
    pub stdout: String,
}

/// Structured log document
///
/// Only the fields this tool acts on; the document may carry more.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructuredLogs {
    #[serde(rename = "exitCode")]
    pub exit_code: Option<i32>,
    #[serde(default)]
    pub results: Vec<NotebookResult>,
}

/// Interpreted terminal outcome of a job
#[derive(Debug, Clone)]
pub struct JobReport {
    /// Resolved exit code: structured `exitCode` wins over the status body's
    /// own `exit_code`; absent both, 1.
    pub exit_code: i32,
    pub rendered_logs: String,
    /// Entries of the structured `results` sequence with non-zero exit codes
    pub failed_notebooks: Vec<NotebookResult>,
}

impl JobReport {
    /// Exit code usable as the process exit status
    ///
    /// Values outside 0-255 would alias on Unix (256 exits as 0), so
    /// out-of-range codes map to 1.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Interpret a terminal job status into an outcome report
pub fn interpret(status: &JobStatus) -> JobReport {
    let joined = status.logs.join("\n");

    match serde_json::from_str::<Value>(&joined) {
        Ok(document) => {
            let structured: StructuredLogs =
                serde_json::from_value(document.clone()).unwrap_or_default();

            let exit_code = structured
                .exit_code
                .or(status.exit_code)
                .unwrap_or(1);

            let rendered_logs = serde_json::to_string_pretty(&document)
                .unwrap_or_else(|_| joined.clone());

            let failed_notebooks = structured
                .results
                .into_iter()
                .filter(|r| r.exit_code != 0)
                .collect();

            JobReport {
                exit_code,
                rendered_logs,
                failed_notebooks,
            }
        }
        Err(_) => JobReport {
            exit_code: status.exit_code.unwrap_or(1),
            rendered_logs: unescape_log_text(&joined),
            failed_notebooks: Vec::new(),
        },
    }
}

/// Undo the escaping a log-mangling layer upstream applies to plain text:
/// literal `\n` becomes a newline and the escaped block character used by
/// progress bars becomes its glyph.
pub fn unescape_log_text(raw: &str) -> String {
    raw.replace("\\n", "\n").replace("\\u2588", "\u{2588}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(exit_code: Option<i32>, logs: &[&str]) -> JobStatus {
        JobStatus {
            status: "stopped".to_string(),
            exit_code,
            logs: logs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_structured_exit_code_is_authoritative() {
        let report = interpret(&status(Some(0), &[r#"{"exitCode": 3}"#]));
        assert_eq!(report.exit_code, 3);
    }

    #[test]
    fn test_structured_document_split_across_lines() {
        let report = interpret(&status(None, &["{", r#"  "exitCode": 2"#, "}"]));
        assert_eq!(report.exit_code, 2);
    }

    #[test]
    fn test_structured_without_exit_code_falls_back() {
        let report = interpret(&status(Some(4), &[r#"{"message": "done"}"#]));
        assert_eq!(report.exit_code, 4);
    }

    #[test]
    fn test_failed_notebooks_extracted() {
        let doc = r#"{
            "exitCode": 1,
            "results": [
                {"notebook": "ok.ipynb", "exitCode": 0, "stdout": ""},
                {"notebook": "bad.ipynb", "exitCode": 2, "stdout": "boom"}
            ]
        }"#;
        let report = interpret(&status(None, &[doc]));

        assert_eq!(report.exit_code, 1);
        assert_eq!(report.failed_notebooks.len(), 1);
        assert_eq!(report.failed_notebooks[0].notebook, "bad.ipynb");
        assert_eq!(report.failed_notebooks[0].stdout, "boom");
    }

    #[test]
    fn test_plain_text_unescapes_artifacts() {
        let report = interpret(&status(Some(2), &["building\\nimage \\u2588\\u2588 done"]));
        assert_eq!(report.rendered_logs, "building\nimage \u{2588}\u{2588} done");
        assert_eq!(report.exit_code, 2);
    }

    #[test]
    fn test_plain_text_defaults_to_exit_one() {
        let report = interpret(&status(None, &["not json"]));
        assert_eq!(report.exit_code, 1);
        assert!(report.failed_notebooks.is_empty());
    }

    #[test]
    fn test_process_exit_code_clamping() {
        let mut report = interpret(&status(Some(0), &[r#"{"exitCode": 0}"#]));
        assert_eq!(report.process_exit_code(), 0);

        report.exit_code = 3;
        assert_eq!(report.process_exit_code(), 3);

        report.exit_code = 256;
        assert_eq!(report.process_exit_code(), 1);

        report.exit_code = -1;
        assert_eq!(report.process_exit_code(), 1);
    }
}
