use crate::config::LabelRulesConfig;
use crate::version::VersionBump;

/// Set of PR labels with case-insensitive membership.
///
/// Label spelling drifts between repositories ("Publish" vs "publish",
/// "Enhancement" vs "enhancement"), so all comparisons are done on
/// lowercased values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Build a label set from raw label names, normalizing to lowercase
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = labels
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        LabelSet { labels }
    }

    /// Parse a comma-separated label list (the `PR_LABELS` format)
    pub fn parse(raw: &str) -> Self {
        LabelSet::new(raw.split(','))
    }

    /// Case-insensitive membership test
    pub fn contains(&self, label: &str) -> bool {
        let needle = label.to_lowercase();
        self.labels.iter().any(|l| *l == needle)
    }

    /// True if any of the given names is present
    pub fn contains_any(&self, names: &[String]) -> bool {
        names.iter().any(|n| self.contains(n))
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Normalized label names, in input order
    pub fn names(&self) -> &[String] {
        &self.labels
    }
}

/// Resolve the version bump kind from a label set.
///
/// Rules are checked in fixed priority order - major, then minor, then
/// patch - and the first match wins, so a PR labeled both "major" and
/// "bug" gets a major bump. Sets matching no rule fall back to patch.
/// Total function: always returns a bump.
pub fn resolve_bump(labels: &LabelSet, rules: &LabelRulesConfig) -> VersionBump {
    let ordered: [(&[String], VersionBump); 3] = [
        (&rules.major, VersionBump::Major),
        (&rules.minor, VersionBump::Minor),
        (&rules.patch, VersionBump::Patch),
    ];

    for (names, bump) in ordered {
        if labels.contains_any(names) {
            return bump;
        }
    }

    VersionBump::Patch
}

/// True if the label set requests release publication
pub fn wants_publish(labels: &LabelSet, rules: &LabelRulesConfig) -> bool {
    labels.contains(&rules.publish)
}
