use thiserror::Error;

/// Unified error type for bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("failed to list tags: {0}")]
    SourceUnavailable(String),

    #[error("existing tag not found")]
    NoTagsFound,

    #[error("invalid semantic version '{tag}': {source}")]
    Parse {
        tag: String,
        #[source]
        source: semver::Error,
    },

    #[error("invalid semantic version '{tag}': {reason}")]
    InvalidTag { tag: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a tag source error with context
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        BumpError::SourceUnavailable(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create an invalid tag error for input that never reached the semver parser
    pub fn invalid_tag(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::InvalidTag {
            tag: tag.into(),
            reason: reason.into(),
        }
    }
}

impl From<git2::Error> for BumpError {
    fn from(err: git2::Error) -> Self {
        BumpError::SourceUnavailable(err.message().to_string())
    }
}
