//! Main workflow orchestration logic
//!
//! Connects the tag source, the comparator and the incrementer. Takes no
//! clap types so it can be driven programmatically and tested in memory.

use crate::config::Config;
use crate::domain::{latest_tag, next_tag, BumpLevel};
use crate::error::{BumpError, Result};
use crate::git::TagSource;

/// Arguments for the bump workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BumpOptions {
    /// Requested bump level
    pub level: BumpLevel,

    /// Only tags starting with this prefix are candidates
    pub tag_prefix: Option<String>,
}

impl BumpOptions {
    /// Options for `level`, taking the tag filter from `config`
    pub fn from_config(level: BumpLevel, config: &Config) -> Self {
        BumpOptions {
            level,
            tag_prefix: config.tag_prefix.clone(),
        }
    }
}

/// Main bump workflow
///
/// 1. List tags from `source`
/// 2. Pick the highest one
/// 3. Parse it and apply the requested level
///
/// # Returns
///
/// The next version as text, or the first error hit along the way. Having
/// no candidate tags at all is [BumpError::NoTagsFound].
pub fn run_bump<S: TagSource + ?Sized>(source: &S, options: &BumpOptions) -> Result<String> {
    let tags = source.list_tags()?;
    log::debug!("listed {} tags", tags.len());

    let candidates = tags.iter().filter(|tag| match &options.tag_prefix {
        Some(prefix) => tag.trim().starts_with(prefix.as_str()),
        None => true,
    });

    let latest = latest_tag(candidates);
    if latest.is_empty() {
        return Err(BumpError::NoTagsFound);
    }
    log::debug!("latest tag is '{}', bumping {}", latest, options.level);

    next_tag(&latest, options.level)
}
