//! CI input reader - resolves the branch name and PR labels from the
//! environment or a GitHub event payload.

use serde::Deserialize;
use std::env;
use std::fs;

use crate::error::{AutoReleaseError, Result};
use crate::labels::LabelSet;

/// Inputs for one release run, read once at startup.
///
/// Everything downstream takes this struct instead of reaching into the
/// process environment, keeping the decision logic testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContext {
    pub branch: String,
    pub labels: LabelSet,
}

impl ReleaseContext {
    pub fn new(branch: impl Into<String>, labels: LabelSet) -> Self {
        ReleaseContext {
            branch: branch.into(),
            labels,
        }
    }

    /// Resolve the context from CLI overrides and the CI environment.
    ///
    /// Branch lookup order: explicit flag, `BRANCH`, `GITHUB_REF` (with
    /// `refs/heads/` stripped). Label lookup order: explicit flag,
    /// `PR_LABELS` (comma-separated), `GITHUB_EVENT_PATH` payload. An
    /// unresolvable branch is fatal; missing labels are an empty set.
    pub fn from_env(branch_flag: Option<&str>, labels_flag: Option<&str>) -> Result<Self> {
        let branch = match branch_flag {
            Some(b) => b.to_string(),
            None => branch_from_env()?,
        };

        let labels = match labels_flag {
            Some(raw) => LabelSet::parse(raw),
            None => labels_from_env()?,
        };

        Ok(ReleaseContext::new(branch, labels))
    }
}

fn branch_from_env() -> Result<String> {
    if let Ok(branch) = env::var("BRANCH") {
        if !branch.trim().is_empty() {
            return Ok(branch.trim().to_string());
        }
    }

    if let Ok(github_ref) = env::var("GITHUB_REF") {
        let branch = github_ref
            .trim()
            .strip_prefix("refs/heads/")
            .unwrap_or(github_ref.trim());
        if !branch.is_empty() {
            return Ok(branch.to_string());
        }
    }

    Err(AutoReleaseError::event(
        "No branch found: set BRANCH or GITHUB_REF, or pass --branch",
    ))
}

fn labels_from_env() -> Result<LabelSet> {
    if let Ok(raw) = env::var("PR_LABELS") {
        return Ok(LabelSet::parse(&raw));
    }

    if let Ok(path) = env::var("GITHUB_EVENT_PATH") {
        let payload = fs::read_to_string(&path).map_err(|e| {
            AutoReleaseError::event(format!("Cannot read event payload at {}: {}", path, e))
        })?;
        return parse_event_labels(&payload);
    }

    Ok(LabelSet::default())
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    #[serde(default)]
    labels: Vec<Label>,
}

#[derive(Debug, Deserialize)]
struct Label {
    name: String,
}

/// Extract label names from a GitHub event payload
/// (`pull_request.labels[].name`). A payload without a pull request
/// section yields an empty set.
pub fn parse_event_labels(payload: &str) -> Result<LabelSet> {
    let event: EventPayload = serde_json::from_str(payload)
        .map_err(|e| AutoReleaseError::event(format!("Malformed event payload: {}", e)))?;

    let names = event
        .pull_request
        .map(|pr| pr.labels.into_iter().map(|l| l.name).collect::<Vec<_>>())
        .unwrap_or_default();

    Ok(LabelSet::new(names))
}
