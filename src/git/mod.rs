//! Tag source abstraction
//!
//! The version logic only needs the names of all tags in a repository. The
//! [TagSource] trait captures exactly that, so the core can run against a
//! real repository or against an in-memory list in tests.
//!
//! - [repository::Git2TagSource]: reads tags through the `git2` crate
//! - [mock::MockTagSource]: a fixed list, optionally failing
//!
//! ```rust
//! # use bump::git::{MockTagSource, TagSource};
//! let source = MockTagSource::new(["v1.0.0", "v1.1.0"]);
//! let tags = source.list_tags().unwrap();
//! assert_eq!(tags.len(), 2);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::Git2TagSource;

use crate::error::Result;

/// Something that can list the tag names of a repository.
///
/// ## Contract
///
/// - No ordering of the returned names is guaranteed.
/// - An empty `Ok` means the repository has no tags, which is not an error here.
/// - Any failure to query the underlying system is reported as
///   [crate::error::BumpError::SourceUnavailable].
pub trait TagSource: Send + Sync {
    fn list_tags(&self) -> Result<Vec<String>>;
}

impl<T: TagSource + ?Sized> TagSource for &T {
    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }
}

impl<T: TagSource + ?Sized> TagSource for Box<T> {
    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }
}
