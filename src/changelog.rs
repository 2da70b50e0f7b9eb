//! Changelog building and persistence.
//!
//! Commits since the previous tag are classified into fixed sections by
//! keyword, rendered as one Markdown block, and prepended to the
//! persisted changelog file. Rendering is deterministic: the same
//! commit set always produces byte-identical text.

use std::fs;
use std::path::Path;

use crate::config::ChangelogConfig;
use crate::error::Result;
use crate::git::CommitInfo;

/// Changelog section, in fixed render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Breaking,
    Features,
    Fixes,
    Other,
}

impl Section {
    /// All sections in render order
    pub const ORDER: [Section; 4] = [
        Section::Breaking,
        Section::Features,
        Section::Fixes,
        Section::Other,
    ];

    /// Fixed Markdown header for this section
    pub fn header(&self) -> &'static str {
        match self {
            Section::Breaking => "### 💥 Breaking Changes",
            Section::Features => "### ✨ Features",
            Section::Fixes => "### 🐛 Bug Fixes",
            Section::Other => "### 🔧 Other",
        }
    }
}

/// Classify a commit subject into exactly one section.
///
/// Keyword lists are checked in fixed priority order (breaking, then
/// feature, then fix) with case-insensitive substring matching; the
/// first hit wins, so a subject mentioning both "fix" and "feature"
/// lands in Features. Subjects matching nothing go to Other.
pub fn classify(subject: &str, config: &ChangelogConfig) -> Section {
    let lowered = subject.to_lowercase();

    let hit = |keywords: &[String]| keywords.iter().any(|k| lowered.contains(&k.to_lowercase()));

    if hit(&config.breaking_keywords) {
        Section::Breaking
    } else if hit(&config.feature_keywords) {
        Section::Features
    } else if hit(&config.fix_keywords) {
        Section::Fixes
    } else {
        Section::Other
    }
}

/// A rendered changelog block for one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogBlock {
    pub tag: String,
    text: String,
}

impl ChangelogBlock {
    /// Build the block for a tag from the commits it covers.
    ///
    /// Each commit renders as `- <subject> (<short hash>)` under its
    /// section; empty sections are omitted entirely. A release with no
    /// commits still renders its `## <tag>` heading.
    pub fn build(tag: &str, commits: &[CommitInfo], config: &ChangelogConfig) -> Self {
        let mut buckets: [Vec<String>; 4] = Default::default();

        for commit in commits {
            let subject = commit.subject();
            let section = classify(&subject, config);
            let index = Section::ORDER
                .iter()
                .position(|s| *s == section)
                .unwrap_or(Section::ORDER.len() - 1);
            buckets[index].push(format!("- {} ({})", subject, commit.short_hash()));
        }

        let mut text = format!("## {}\n", tag);
        for (section, lines) in Section::ORDER.iter().zip(buckets.iter()) {
            if lines.is_empty() {
                continue;
            }
            text.push('\n');
            text.push_str(section.header());
            text.push('\n');
            for line in lines {
                text.push_str(line);
                text.push('\n');
            }
        }

        ChangelogBlock {
            tag: tag.to_string(),
            text,
        }
    }

    /// The rendered Markdown text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Prepend this block to the changelog file.
    ///
    /// Existing content is preserved below the new block; a missing
    /// file is treated as empty. History is never rewritten.
    pub fn prepend_to(&self, path: &Path) -> Result<()> {
        let existing = if path.exists() {
            fs::read_to_string(path)?
        } else {
            String::new()
        };

        let content = if existing.is_empty() {
            self.text.clone()
        } else {
            format!("{}\n{}", self.text, existing)
        };

        fs::write(path, content)?;
        Ok(())
    }
}
