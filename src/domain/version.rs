use crate::domain::BumpLevel;
use crate::error::{BumpError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// Splits a tag into its non-numeric prefix and the semver body that follows.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<prefix>[^0-9]*)(?P<body>[0-9].*)$").unwrap());

/// A semantic version read from a tag name.
///
/// Keeps the tag's prefix (`v`, `V`, `release-`, ...) and its exact original
/// text so that a bumped version is rendered in the same convention and an
/// unbumped one is rendered byte for byte as it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVersion {
    prefix: String,
    version: semver::Version,
    original: String,
}

impl TagVersion {
    /// Parse a tag such as `v1.2.3`, `1.2.3-rc.1` or `release-2.0.0+build.5`.
    ///
    /// Surrounding whitespace is ignored. The part after the prefix must be a
    /// strict semver 2.0 version: three numeric components without leading
    /// zeros, optionally followed by pre-release and build metadata.
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        let caps = TAG_RE
            .captures(trimmed)
            .ok_or_else(|| BumpError::invalid_tag(trimmed, "no numeric version component"))?;

        let body = &caps["body"];
        let version = semver::Version::parse(body).map_err(|source| BumpError::Parse {
            tag: trimmed.to_string(),
            source,
        })?;

        Ok(TagVersion {
            prefix: caps["prefix"].to_string(),
            version,
            original: trimmed.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.version.major
    }

    pub fn minor(&self) -> u64 {
        self.version.minor
    }

    pub fn patch(&self) -> u64 {
        self.version.patch
    }

    /// Leading non-numeric part of the tag, empty for bare versions
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The parsed version without its prefix
    pub fn version(&self) -> &semver::Version {
        &self.version
    }

    /// The text this version was parsed from, or was rendered as after a bump
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Produce the next version for `level`.
    ///
    /// - **Patch**: patch += 1
    /// - **Minor**: minor += 1, patch = 0
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Current**: unchanged, original text included
    ///
    /// Every real bump drops pre-release and build metadata and keeps the prefix.
    pub fn bump(&self, level: BumpLevel) -> Result<Self> {
        let v = &self.version;
        let next = match level {
            BumpLevel::Current => return Ok(self.clone()),
            BumpLevel::Patch => semver::Version::new(v.major, v.minor, self.increment(v.patch)?),
            BumpLevel::Minor => semver::Version::new(v.major, self.increment(v.minor)?, 0),
            BumpLevel::Major => semver::Version::new(self.increment(v.major)?, 0, 0),
        };

        Ok(TagVersion {
            original: format!("{}{}", self.prefix, next),
            prefix: self.prefix.clone(),
            version: next,
        })
    }

    fn increment(&self, component: u64) -> Result<u64> {
        component
            .checked_add(1)
            .ok_or_else(|| BumpError::invalid_tag(&self.original, "version component overflow"))
    }

    /// Order by `(major, minor, patch)` only. Prefix, pre-release and build
    /// metadata never take part, so `v1.0.0-rc.1` and `1.0.0` are equal.
    pub fn cmp_numeric(&self, other: &Self) -> Ordering {
        let a = &self.version;
        let b = &other.version;
        (a.major, a.minor, a.patch).cmp(&(b.major, b.minor, b.patch))
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Parse `latest` and render the version that follows it at `level`.
pub fn next_tag(latest: &str, level: BumpLevel) -> Result<String> {
    let current = TagVersion::parse(latest)?;
    Ok(current.bump(level)?.to_string())
}
