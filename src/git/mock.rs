use std::path::{Path, PathBuf};
use std::sync::Mutex;

use git2::Oid;

use crate::config::BotConfig;
use crate::error::{AutoReleaseError, Result};
use crate::git::{CommitInfo, CommitOutcome, Repository};

/// Mock repository for testing the workflow without git operations.
///
/// Pre-seeded with tags and commit history; records every side effect
/// (created tags, pushes, file commits) for assertions.
pub struct MockRepository {
    head: Oid,
    commits: Vec<CommitInfo>,
    tags: Mutex<Vec<String>>,
    clean_tree: bool,
    pub pushed_tags: Mutex<Vec<(String, String)>>,
    pub pushed_branches: Mutex<Vec<(String, String)>>,
    pub committed_files: Mutex<Vec<(PathBuf, String)>>,
}

impl MockRepository {
    /// Create a mock repository with an arbitrary HEAD and no history
    pub fn new() -> Self {
        MockRepository {
            head: Oid::from_bytes(&[7; 20]).unwrap_or_else(|_| Oid::zero()),
            commits: Vec::new(),
            tags: Mutex::new(Vec::new()),
            clean_tree: false,
            pushed_tags: Mutex::new(Vec::new()),
            pushed_branches: Mutex::new(Vec::new()),
            committed_files: Mutex::new(Vec::new()),
        }
    }

    /// Seed an existing tag
    pub fn with_tag(self, name: impl Into<String>) -> Self {
        self.tags.lock().unwrap().push(name.into());
        self
    }

    /// Seed a commit in chronological order (oldest first)
    pub fn with_commit(mut self, hash: impl Into<String>, message: impl Into<String>) -> Self {
        self.commits.push(CommitInfo {
            hash: hash.into(),
            message: message.into(),
            author: "Mock Author".to_string(),
        });
        self
    }

    /// Make `commit_file` report a clean work tree
    pub fn with_clean_tree(mut self) -> Self {
        self.clean_tree = true;
        self
    }

    /// Tags currently in the mock, including ones created by the workflow
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.lock().unwrap().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        Ok(self.head)
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.lock().unwrap().clone())
    }

    fn commits_since(&self, tag: Option<&str>, fallback_window: usize) -> Result<Vec<CommitInfo>> {
        // The mock doesn't model tag-to-commit reachability; a seeded
        // tag just means "all seeded commits are newer than it".
        let mut commits = self.commits.clone();
        if tag.is_none() && commits.len() > fallback_window {
            commits = commits.split_off(commits.len() - fallback_window);
        }
        Ok(commits)
    }

    fn create_tag(&self, name: &str, _oid: Oid) -> Result<()> {
        let mut tags = self.tags.lock().unwrap();
        if tags.iter().any(|t| t == name) {
            return Err(AutoReleaseError::tag(format!(
                "Tag '{}' already exists",
                name
            )));
        }
        tags.push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        self.pushed_tags
            .lock()
            .unwrap()
            .push((remote.to_string(), tag_name.to_string()));
        Ok(())
    }

    fn commit_file(&self, path: &Path, message: &str, _bot: &BotConfig) -> Result<CommitOutcome> {
        if self.clean_tree {
            return Ok(CommitOutcome::NothingToCommit);
        }
        self.committed_files
            .lock()
            .unwrap()
            .push((path.to_path_buf(), message.to_string()));
        Ok(CommitOutcome::Committed)
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.pushed_branches
            .lock()
            .unwrap()
            .push((remote.to_string(), branch.to_string()));
        Ok(())
    }
}
