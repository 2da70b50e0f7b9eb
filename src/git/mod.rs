//! Git operations abstraction layer.
//!
//! The [Repository] trait covers the narrow set of git operations the
//! release workflow needs: reading HEAD, listing tags, collecting
//! commit history, creating and pushing tags, and committing the
//! changelog file. Implementations:
//!
//! - [repository::Git2Repository]: real repositories via the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! Decision logic depends on this trait rather than on `git2` directly,
//! so the whole workflow is testable without a real repository.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::Path;

use git2::Oid;

use crate::config::BotConfig;
use crate::error::Result;

/// Commit information used for changelog building
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Full commit hash
    pub hash: String,
    /// Full commit message
    pub message: String,
    /// Commit author name
    pub author: String,
}

impl CommitInfo {
    /// First line of the commit message
    pub fn subject(&self) -> String {
        self.message.lines().next().unwrap_or("").trim().to_string()
    }

    /// Abbreviated commit hash (7 characters)
    pub fn short_hash(&self) -> &str {
        if self.hash.len() > 7 {
            &self.hash[..7]
        } else {
            &self.hash
        }
    }
}

/// Outcome of committing the changelog file.
///
/// A clean tree is an expected no-op in re-runs, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    NothingToCommit,
}

/// Narrow git interface for the release workflow.
///
/// Tag absence is modeled as `Ok(None)`/empty results; only real git
/// failures surface as `Err`. Implementors must be `Send + Sync`.
pub trait Repository: Send + Sync {
    /// OID of the current HEAD commit
    fn head_oid(&self) -> Result<Oid>;

    /// All tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commits reachable from HEAD since the given tag, in
    /// chronological order (oldest first), excluding the tag commit.
    ///
    /// With no tag, returns at most `fallback_window` most recent
    /// commits so a fresh repository still gets a bounded changelog.
    fn commits_since(&self, tag: Option<&str>, fallback_window: usize) -> Result<Vec<CommitInfo>>;

    /// Create a lightweight tag pointing at the given commit
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;

    /// Push a single tag to a remote
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;

    /// Stage one file and commit it to HEAD with the bot identity.
    ///
    /// `path` is relative to the repository work tree. Returns
    /// [CommitOutcome::NothingToCommit] when the file matches HEAD.
    fn commit_file(&self, path: &Path, message: &str, bot: &BotConfig) -> Result<CommitOutcome>;

    /// Push a branch to a remote
    fn push_branch(&self, remote: &str, branch: &str) -> Result<()>;
}
