use crate::error::{AutoReleaseError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Version bump kind resolved from PR labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Base version used when a branch has no tags yet
    pub fn initial() -> Self {
        Version::new(0, 1, 0)
    }

    /// Parse a bare version string (e.g., "1.2.3" -> Version(1,2,3)).
    ///
    /// Malformed input is a fatal error: a tag that matched the branch
    /// pattern but carries a broken version number means the tag
    /// namespace is corrupt, and the run must not guess.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(AutoReleaseError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                input
            )));
        }

        let major = parts[0].parse::<u32>().map_err(|_| {
            AutoReleaseError::version(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            AutoReleaseError::version(format!("Invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse::<u32>().map_err(|_| {
            AutoReleaseError::version(format!("Invalid patch version: {}", parts[2]))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump kind, zeroing lower-order fields
    pub fn bump(&self, bump: &VersionBump) -> Self {
        match bump {
            VersionBump::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("a.b.c").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor_zeroes_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(&VersionBump::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_is_monotonic() {
        let v = Version::new(1, 2, 3);
        assert!(v.bump(&VersionBump::Patch) > v);
        assert!(v.bump(&VersionBump::Minor) > v.bump(&VersionBump::Patch));
        assert!(v.bump(&VersionBump::Major) > v.bump(&VersionBump::Minor));
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 9));
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(Version::initial().to_string(), "0.1.0");
    }
}
