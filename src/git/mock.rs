use crate::error::{BumpError, Result};
use crate::git::TagSource;

/// In-memory tag source for testing without a repository
#[derive(Debug, Clone, Default)]
pub struct MockTagSource {
    tags: Vec<String>,
    failure: Option<String>,
}

impl MockTagSource {
    /// Create a source that returns `tags` in the given order
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Create a source whose every query fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        match &self.failure {
            Some(message) => Err(BumpError::source_unavailable(message.clone())),
            None => Ok(self.tags.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_lists_tags_in_order() {
        let source = MockTagSource::new(["v1.0.0", "v0.1.0"]);
        assert_eq!(source.list_tags().unwrap(), vec!["v1.0.0", "v0.1.0"]);
    }

    #[test]
    fn test_mock_default_is_empty() {
        let source = MockTagSource::default();
        assert!(source.list_tags().unwrap().is_empty());
    }

    #[test]
    fn test_mock_failing() {
        let source = MockTagSource::failing("git not installed");
        let err = source.list_tags().unwrap_err();
        assert!(matches!(err, BumpError::SourceUnavailable(_)));
        assert_eq!(err.to_string(), "failed to list tags: git not installed");
    }

    #[test]
    fn test_trait_object_and_reference() {
        let boxed: Box<dyn TagSource> = Box::new(MockTagSource::new(["v1.0.0"]));
        assert_eq!(boxed.list_tags().unwrap().len(), 1);

        let source = MockTagSource::new(["a", "b"]);
        let by_ref = &source;
        assert_eq!(by_ref.list_tags().unwrap().len(), 2);
    }
}
