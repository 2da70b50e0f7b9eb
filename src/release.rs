//! GitHub release creation via the `gh` CLI.

use std::path::Path;
use std::process::Command;
use std::sync::Mutex;

use crate::error::{AutoReleaseError, Result};

/// Client capable of creating a (pre-)release for a tag
pub trait ReleaseClient: Send + Sync {
    /// Create a release for `tag` using the notes file as release notes.
    /// `prerelease` marks the release as unstable.
    fn create_release(&self, tag: &str, notes_file: &Path, prerelease: bool) -> Result<()>;
}

/// Release client that shells out to the `gh` CLI.
///
/// Runs `gh release create <tag> --title <tag> --notes-file <path>`
/// with `--prerelease` appended for develop-branch releases. Any
/// non-zero exit is fatal.
pub struct GhCli;

impl ReleaseClient for GhCli {
    fn create_release(&self, tag: &str, notes_file: &Path, prerelease: bool) -> Result<()> {
        let mut cmd = Command::new("gh");
        cmd.args(["release", "create", tag, "--title", tag, "--notes-file"])
            .arg(notes_file);

        if prerelease {
            cmd.arg("--prerelease");
        }

        let output = cmd.output().map_err(|e| {
            AutoReleaseError::release(format!("Failed to execute gh: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AutoReleaseError::release(format!(
                "gh release create exited with {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// In-memory release client recording invocations for tests
#[derive(Default)]
pub struct MockReleaseClient {
    pub created: Mutex<Vec<CreatedRelease>>,
}

/// One recorded `create_release` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRelease {
    pub tag: String,
    pub notes_file: String,
    pub prerelease: bool,
}

impl MockReleaseClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReleaseClient for MockReleaseClient {
    fn create_release(&self, tag: &str, notes_file: &Path, prerelease: bool) -> Result<()> {
        self.created.lock().unwrap().push(CreatedRelease {
            tag: tag.to_string(),
            notes_file: notes_file.display().to_string(),
            prerelease,
        });
        Ok(())
    }
}
