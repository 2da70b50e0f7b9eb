use std::path::Path;

use git2::{Oid, Repository as Git2Repo, Signature};

use crate::config::BotConfig;
use crate::error::{AutoReleaseError, Result};
use crate::git::{CommitInfo, CommitOutcome};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn tag_target_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                let oid = reference
                    .peel(git2::ObjectType::Any)
                    .map_err(|e| AutoReleaseError::tag(format!("Cannot peel tag: {}", e)))?
                    .id();
                Ok(Some(oid))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(AutoReleaseError::tag(format!(
                "Cannot find tag '{}': {}",
                tag_name, e
            ))),
        }
    }
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| AutoReleaseError::branch("HEAD is detached or invalid".to_string()))
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;
        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn commits_since(&self, tag: Option<&str>, fallback_window: usize) -> Result<Vec<CommitInfo>> {
        let head = self.head_oid()?;

        let stop_oid = match tag {
            Some(name) => self.tag_target_oid(name)?,
            None => None,
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;

            if Some(oid) == stop_oid {
                break;
            }

            // No tag to stop at: bound the walk instead
            if stop_oid.is_none() && commits.len() >= fallback_window {
                break;
            }

            let commit = self.repo.find_commit(oid)?;
            commits.push(CommitInfo {
                hash: oid.to_string(),
                message: commit.message().unwrap_or("(empty message)").to_string(),
                author: commit.author().name().unwrap_or("unknown").to_string(),
            });
        }

        commits.reverse();
        Ok(commits)
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let object = self
            .repo
            .find_object(oid, None)
            .map_err(|e| AutoReleaseError::tag(format!("Cannot find object: {}", e)))?;

        self.repo
            .tag_lightweight(name, &object, false)
            .map_err(|e| AutoReleaseError::tag(format!("Cannot create tag: {}", e)))?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| AutoReleaseError::remote(format!("Cannot find remote: {}", e)))?;

        let refspec = format!("refs/tags/{}:refs/tags/{}", tag_name, tag_name);
        remote
            .push(&[refspec.as_str()], None)
            .map_err(|e| AutoReleaseError::remote(format!("Push failed: {}", e)))?;

        Ok(())
    }

    fn commit_file(&self, path: &Path, message: &str, bot: &BotConfig) -> Result<CommitOutcome> {
        let mut index = self.repo.index()?;
        index.add_path(path).map_err(|e| {
            AutoReleaseError::remote(format!("Cannot stage {}: {}", path.display(), e))
        })?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let head_commit = self.repo.head()?.peel_to_commit()?;

        // Staged tree identical to HEAD means the file didn't change
        if head_commit.tree_id() == tree_id {
            return Ok(CommitOutcome::NothingToCommit);
        }

        let tree = self.repo.find_tree(tree_id)?;
        let signature = Signature::now(&bot.name, &bot.email)?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&head_commit],
        )?;

        Ok(CommitOutcome::Committed)
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| AutoReleaseError::remote(format!("Cannot find remote: {}", e)))?;

        let refspec = format!("refs/heads/{}:refs/heads/{}", branch, branch);
        remote
            .push(&[refspec.as_str()], None)
            .map_err(|e| AutoReleaseError::remote(format!("Push failed: {}", e)))?;

        Ok(())
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's
// thread-safe design.
unsafe impl Sync for Git2Repository {}
