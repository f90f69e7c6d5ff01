use crate::error::{BumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "BUMP_CONFIG";

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "bump.toml";

/// Optional settings for bump.
///
/// Every key may be omitted; an absent file means all defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory the git repository is discovered from
    #[serde(default)]
    pub repository: Option<PathBuf>,

    /// Only tags starting with this prefix are considered
    #[serde(default)]
    pub tag_prefix: Option<String>,
}

impl Config {
    /// Directory to discover the repository from, `.` when unset
    pub fn repository_path(&self) -> &Path {
        self.repository.as_deref().unwrap_or_else(|| Path::new("."))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Looks in the following order:
/// 1. `config_path`, when given
/// 2. `bump.toml` in the current directory
/// 3. `bump.toml` in the user config directory
/// 4. Defaults
///
/// An explicit path that does not exist is an error; the other locations
/// are simply skipped when missing. The chosen file is logged at info level,
/// since a file in the user config directory applies to every repository.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let Some(path) = resolve_config_path(config_path) else {
        log::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    log::info!("loading configuration from {}", path.display());
    let content = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&content)
        .map_err(|e| BumpError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// The file [load_config] would read, or `None` when defaults apply.
pub fn resolve_config_path(config_path: Option<&Path>) -> Option<PathBuf> {
    match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(),
    }
}

fn discover_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.repository, None);
        assert_eq!(config.tag_prefix, None);
        assert_eq!(config.repository_path(), Path::new("."));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let config = parse_config(
            r#"
repository = "../app"
tag_prefix = "api-v"
"#,
        )
        .unwrap();
        assert_eq!(config.repository_path(), Path::new("../app"));
        assert_eq!(config.tag_prefix.as_deref(), Some("api-v"));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert!(parse_config("prefix = \"v\"").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        assert!(parse_config("tag_prefix = 3").is_err());
    }
}
