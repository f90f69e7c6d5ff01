use crate::error::{BumpError, Result};
use crate::git::TagSource;
use git2::Repository;
use std::path::{Path, PathBuf};

/// Tag source backed by a git repository on disk.
///
/// Only the location of the repository is held; it is reopened on every
/// query since `git2::Repository` is not `Sync`.
#[derive(Debug, Clone)]
pub struct Git2TagSource {
    git_dir: PathBuf,
}

impl Git2TagSource {
    /// Discover the repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            BumpError::source_unavailable(format!(
                "not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;

        let source = Git2TagSource {
            git_dir: repo.path().to_path_buf(),
        };
        log::debug!("using repository at {}", source.git_dir.display());
        Ok(source)
    }
}

impl TagSource for Git2TagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        let repo = Repository::open(&self.git_dir)?;
        let tags = repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn commit_and_tag(repo: &Repository, tags: &[&str]) {
        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let commit_id = repo
            .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();
        let object = repo.find_object(commit_id, None).unwrap();
        for tag in tags {
            repo.tag_lightweight(tag, &object, false).unwrap();
        }
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        let err = Git2TagSource::open(dir.path()).unwrap_err();
        assert!(matches!(err, BumpError::SourceUnavailable(_)));
        assert!(err.to_string().starts_with("failed to list tags: "));
    }

    #[test]
    fn test_empty_repository_has_no_tags() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();

        let source = Git2TagSource::open(dir.path()).unwrap();
        assert!(source.list_tags().unwrap().is_empty());
    }

    #[test]
    fn test_lists_all_tags() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        commit_and_tag(&repo, &["v1.0.0", "v1.1.0", "nightly"]);

        let source = Git2TagSource::open(dir.path()).unwrap();
        let mut tags = source.list_tags().unwrap();
        tags.sort();
        assert_eq!(tags, vec!["nightly", "v1.0.0", "v1.1.0"]);
    }

    #[test]
    fn test_discovers_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        commit_and_tag(&repo, &["v0.1.0"]);
        let nested = dir.path().join("src").join("nested");
        std::fs::create_dir_all(&nested).unwrap();

        let source = Git2TagSource::open(&nested).unwrap();
        assert_eq!(source.list_tags().unwrap(), vec!["v0.1.0"]);
    }
}
