//! Trigger request types
//!
//! Payload sent to the execution service to start a Papermill job. The
//! service builds the repository with repo2docker and runs the notebooks it
//! finds, optionally restricted to a set of directories.

use serde::Serialize;

/// Request to execute the notebooks of a repository
#[derive(Debug, Clone, Serialize)]
pub struct JobRequest {
    pub user_options: UserOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notebook_dirs: Vec<String>,
}

/// Build options understood by the execution service
#[derive(Debug, Clone, Serialize)]
pub struct UserOptions {
    pub option: String,
    pub repo2docker: Repo2Docker,
}

/// repo2docker build source
#[derive(Debug, Clone, Serialize)]
pub struct Repo2Docker {
    pub repotype: String,
    pub repourl: String,
    pub reporef: String,
}

impl JobRequest {
    /// Create a request for a GitHub-hosted repository
    ///
    /// # Arguments
    /// * `repository` - Repository to build (e.g. "org/repo")
    /// * `reference` - Git ref to check out
    /// * `notebook_dirs` - Directories to restrict execution to; empty runs everything
    pub fn new(
        repository: impl Into<String>,
        reference: impl Into<String>,
        notebook_dirs: Vec<String>,
    ) -> Self {
        Self {
            user_options: UserOptions {
                option: "repo2docker".to_string(),
                repo2docker: Repo2Docker {
                    repotype: "gh".to_string(),
                    repourl: repository.into(),
                    reporef: reference.into(),
                },
            },
            notebook_dirs,
        }
    }
}

/// Parse a notebook-directory list from its raw configuration value
///
/// Accepts either a JSON array of strings or a comma-separated list.
/// Empty or whitespace-only input yields an empty list.
pub fn parse_notebook_dirs(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if let Ok(dirs) = serde_json::from_str::<Vec<String>>(trimmed) {
        return dirs;
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_array() {
        let dirs = parse_notebook_dirs(r#"["notebooks", "examples/basic"]"#);
        assert_eq!(dirs, vec!["notebooks", "examples/basic"]);
    }

    #[test]
    fn test_parse_comma_separated() {
        let dirs = parse_notebook_dirs(" notebooks , demos ,, tutorials ");
        assert_eq!(dirs, vec!["notebooks", "demos", "tutorials"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_notebook_dirs("").is_empty());
        assert!(parse_notebook_dirs("   ").is_empty());
        assert!(parse_notebook_dirs("[]").is_empty());
    }

    #[test]
    fn test_request_wire_shape() {
        let request = JobRequest::new("org/repo", "main", vec!["notebooks".to_string()]);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "user_options": {
                    "option": "repo2docker",
                    "repo2docker": {
                        "repotype": "gh",
                        "repourl": "org/repo",
                        "reporef": "main"
                    }
                },
                "notebook_dirs": ["notebooks"]
            })
        );
    }

    #[test]
    fn test_request_omits_empty_notebook_dirs() {
        let request = JobRequest::new("org/repo", "HEAD", Vec::new());
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("notebook_dirs").is_none());
    }
}
