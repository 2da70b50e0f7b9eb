use crate::error::{AutoReleaseError, Result};
use crate::version::Version;

/// Tag naming pattern (e.g., "v{version}", "dev-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern. The pattern must contain a `{version}`
    /// placeholder.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains("{version}") {
            return Err(AutoReleaseError::tag(format!(
                "Pattern '{}' must contain a {{version}} placeholder",
                pattern
            )));
        }
        Ok(TagPattern { pattern })
    }

    /// Format a version according to the pattern.
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace("{version}", &version.to_string())
    }

    /// Check whether a tag name matches this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.version_regex()
            .map(|re| re.is_match(tag))
            .unwrap_or(false)
    }

    /// Extract the version part from a matching tag.
    ///
    /// Returns `Ok(None)` for tags that don't match the pattern at all
    /// (foreign tags are expected and skipped). A tag that matches the
    /// pattern shape but fails version parsing is a fatal error.
    pub fn version_part(&self, tag: &str) -> Result<Option<Version>> {
        let re = self.version_regex()?;
        match re.captures(tag) {
            Some(captures) => {
                let raw = captures
                    .get(1)
                    .ok_or_else(|| AutoReleaseError::tag("Pattern captured no version"))?
                    .as_str();
                Version::parse(raw).map(Some)
            }
            None => Ok(None),
        }
    }

    fn version_regex(&self) -> Result<regex::Regex> {
        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(\d+\.\d+\.\d+)");
        regex::Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| AutoReleaseError::tag(format!("Invalid tag pattern: {}", e)))
    }
}

/// Find the highest-versioned tag matching the pattern.
///
/// Scans the full tag namespace, keeps tags matching the pattern, and
/// orders them by parsed version rather than lexicographically (so
/// "v1.10.0" sorts above "v1.9.0"). Returns `None` when no tag matches.
pub fn highest_matching(tags: &[String], pattern: &TagPattern) -> Result<Option<(String, Version)>> {
    let mut best: Option<(String, Version)> = None;

    for tag in tags {
        if let Some(version) = pattern.version_part(tag)? {
            match &best {
                Some((_, best_version)) if *best_version >= version => {}
                _ => best = Some((tag.clone(), version)),
            }
        }
    }

    Ok(best)
}
