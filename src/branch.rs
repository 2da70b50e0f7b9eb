use crate::config::Config;
use crate::error::Result;
use crate::tag::TagPattern;

/// A branch that is configured for release tagging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBranch {
    pub name: String,
    pub pattern: TagPattern,
    pub prerelease: bool,
}

impl ReleaseBranch {
    /// Resolve a branch name against the configured branch table.
    ///
    /// Returns `Ok(None)` for branches that are not configured for
    /// tagging - the caller short-circuits with a warning and a clean
    /// exit, performing no further side effects.
    pub fn resolve(branch: &str, config: &Config) -> Result<Option<ReleaseBranch>> {
        let pattern = match config.branches.get(branch) {
            Some(p) => TagPattern::new(p.clone())?,
            None => return Ok(None),
        };

        let prerelease = config
            .prerelease_branches
            .iter()
            .any(|b| b == branch);

        Ok(Some(ReleaseBranch {
            name: branch.to_string(),
            pattern,
            prerelease,
        }))
    }
}
