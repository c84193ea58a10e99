//! minecarbon configuration.
//!
//! Loaded from `~/.minecarbon/config.toml`. Every key is optional; a missing
//! file means defaults.
//!
//! ```toml
//! data-dir = "/srv/minecarbon"
//! log-level = "info"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Log filter used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors reading or parsing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// minecarbon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Where reports are stored. Defaults to `~/.minecarbon/`.
    pub data_dir: Option<PathBuf>,

    /// A `tracing` filter directive, e.g. `info` or `minecarbon=debug`.
    pub log_level: Option<String>,
}

impl Config {
    /// Load config from `~/.minecarbon/config.toml`, or defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `~/.minecarbon/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".minecarbon").join("config.toml"))
    }

    /// The log filter to fall back on when `MINECARBON_LOG` is unset.
    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.data_dir.is_none());
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn reads_kebab_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data-dir = \"/srv/minecarbon\"\nlog-level = \"debug\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/minecarbon")));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn empty_log_level_falls_back() {
        let config = Config {
            data_dir: None,
            log_level: Some(String::new()),
        };
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data-dir = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
