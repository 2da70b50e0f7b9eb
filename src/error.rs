use thiserror::Error;

/// Unified error type for auto-release operations
#[derive(Error, Debug)]
pub enum AutoReleaseError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event error: {0}")]
    Event(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Release creation failed: {0}")]
    Release(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in auto-release
pub type Result<T> = std::result::Result<T, AutoReleaseError>;

impl AutoReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoReleaseError::Config(msg.into())
    }

    /// Create an event error with context
    pub fn event(msg: impl Into<String>) -> Self {
        AutoReleaseError::Event(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        AutoReleaseError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        AutoReleaseError::Tag(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        AutoReleaseError::Branch(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        AutoReleaseError::Remote(msg.into())
    }

    /// Create a release error with context
    pub fn release(msg: impl Into<String>) -> Self {
        AutoReleaseError::Release(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AutoReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AutoReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(AutoReleaseError::version("test")
            .to_string()
            .contains("Version"));
        assert!(AutoReleaseError::tag("test").to_string().contains("Tag"));
        assert!(AutoReleaseError::release("test")
            .to_string()
            .contains("Release"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (AutoReleaseError::config("x"), "Configuration error"),
            (AutoReleaseError::event("x"), "Event error"),
            (AutoReleaseError::version("x"), "Version parsing error"),
            (AutoReleaseError::tag("x"), "Tag error"),
            (AutoReleaseError::remote("x"), "Remote operation failed"),
            (AutoReleaseError::release("x"), "Release creation failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            AutoReleaseError::config(""),
            AutoReleaseError::version(""),
            AutoReleaseError::tag(""),
        ];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }
}
