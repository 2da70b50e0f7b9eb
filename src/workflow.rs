//! Release workflow orchestration.
//!
//! Drives one run end to end: resolve the branch, resolve the bump
//! from labels, locate the latest tag, bump the version, build and
//! persist the changelog, tag, push, and optionally publish a release.
//! Runs strictly top to bottom; the only recovered conditions are an
//! unconfigured branch (clean skip) and a changelog commit with
//! nothing to commit.

use std::fs;
use std::path::Path;

use crate::branch::ReleaseBranch;
use crate::changelog::ChangelogBlock;
use crate::config::Config;
use crate::error::Result;
use crate::event::ReleaseContext;
use crate::git::{CommitOutcome, Repository};
use crate::labels;
use crate::release::ReleaseClient;
use crate::tag;
use crate::ui;
use crate::version::Version;

/// Options controlling a single workflow run
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// Remote for tag and branch pushes
    pub remote: String,
    /// Preview without side effects
    pub dry_run: bool,
    /// Ignore the publish label
    pub no_publish: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        WorkflowOptions {
            remote: "origin".to_string(),
            dry_run: false,
            no_publish: false,
        }
    }
}

/// Result of a workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Branch is not configured for tagging; nothing was done
    UnsupportedBranch { branch: String },
    /// Dry run: the tag that would be created
    DryRun { tag: String, would_publish: bool },
    /// A tag was created and pushed
    Released {
        tag: String,
        published: bool,
        changelog: String,
    },
}

/// Run the release workflow once.
///
/// All git and release-CLI work goes through the `repo` and `releases`
/// traits, so the full flow is testable against mocks.
pub fn run_release<R: Repository, C: ReleaseClient>(
    context: &ReleaseContext,
    config: &Config,
    repo: &R,
    releases: &C,
    options: &WorkflowOptions,
) -> Result<WorkflowOutcome> {
    ui::display_context(&context.branch, &context.labels);

    let branch = match ReleaseBranch::resolve(&context.branch, config)? {
        Some(branch) => branch,
        None => {
            ui::display_warning(&format!(
                "No tagging performed - branch '{}' is not configured for releases",
                context.branch
            ));
            return Ok(WorkflowOutcome::UnsupportedBranch {
                branch: context.branch.clone(),
            });
        }
    };

    let bump = labels::resolve_bump(&context.labels, &config.labels);
    let publish = !options.no_publish && labels::wants_publish(&context.labels, &config.labels);

    // Locate the highest existing tag for this branch's pattern
    let tags = repo.list_tags()?;
    let latest = tag::highest_matching(&tags, &branch.pattern)?;

    let current = latest
        .as_ref()
        .map(|(_, version)| *version)
        .unwrap_or_else(Version::initial);
    let next = current.bump(&bump);
    let new_tag = branch.pattern.format(&next);

    let latest_name = latest.as_ref().map(|(name, _)| name.as_str());
    ui::display_proposed_tag(latest_name, &new_tag);

    let commits = repo.commits_since(latest_name, config.changelog.fallback_commit_window)?;
    let block = ChangelogBlock::build(&new_tag, &commits, &config.changelog);

    if options.dry_run {
        ui::display_status("Dry run - no changes will be made");
        ui::display_success(&format!("Would create tag {}", new_tag));
        if publish {
            ui::display_success(&format!(
                "Would publish {}{}",
                new_tag,
                if branch.prerelease { " as pre-release" } else { "" }
            ));
        }
        return Ok(WorkflowOutcome::DryRun {
            tag: new_tag,
            would_publish: publish,
        });
    }

    // Persist the changelog before tagging so the tag covers it
    let changelog_path = Path::new(&config.changelog.path);
    block.prepend_to(changelog_path)?;
    ui::display_status(&format!("Updated {}", config.changelog.path));

    let commit_message = format!("chore: update changelog for {}", new_tag);
    match repo.commit_file(changelog_path, &commit_message, &config.bot)? {
        CommitOutcome::Committed => {
            repo.push_branch(&options.remote, &branch.name)?;
            ui::display_success(&format!("Committed and pushed {}", config.changelog.path));
        }
        CommitOutcome::NothingToCommit => {
            ui::display_status("Changelog unchanged, nothing to commit");
        }
    }

    let head = repo.head_oid()?;
    repo.create_tag(&new_tag, head)?;
    repo.push_tag(&options.remote, &new_tag)?;
    ui::display_success(&format!("Created and pushed tag {}", new_tag));

    if publish {
        let notes_path = Path::new(&config.changelog.notes_path);
        fs::write(notes_path, block.text())?;
        releases.create_release(&new_tag, notes_path, branch.prerelease)?;
        ui::display_success(&format!(
            "Published release for {}{}",
            new_tag,
            if branch.prerelease { " (pre-release)" } else { "" }
        ));
    } else {
        ui::display_status("Skipping release (no publish label)");
    }

    Ok(WorkflowOutcome::Released {
        tag: new_tag,
        published: publish,
        changelog: block.text().to_string(),
    })
}
