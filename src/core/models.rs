//! Configuration model for wikidiary
//!
//! Runtime settings come from an optional `.wikidiary.json`, discovered in
//! the note directory first and the home directory second; a missing file
//! means defaults, a malformed one is an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, WikiError};

/// Name of the optional configuration file
pub const CONFIG_FILE: &str = ".wikidiary.json";

/// Configuration loaded from .wikidiary.json
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WikiConfig {
    /// Directory holding the note files
    #[serde(default = "default_diary_dir")]
    pub diary_dir: PathBuf,
    /// Age window in days for the recent-topics listing
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: i64,
    /// Maximum dates shown per topic timeline
    #[serde(default = "default_timeline_limit")]
    pub timeline_limit: usize,
}

fn default_diary_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("diary")
}

fn default_recent_window_days() -> i64 {
    90
}

fn default_timeline_limit() -> usize {
    5
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            diary_dir: default_diary_dir(),
            recent_window_days: default_recent_window_days(),
            timeline_limit: default_timeline_limit(),
        }
    }
}

impl WikiConfig {
    /// Load configuration, preferring an explicit directory override.
    ///
    /// The config file is looked up in the explicit directory (when given),
    /// then the current directory, then home. With `dir` set, the resolved
    /// configuration always points at that directory regardless of what the
    /// file says.
    pub fn discover(dir: Option<&Path>) -> Result<Self> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(dir) = dir {
            candidates.push(dir.join(CONFIG_FILE));
        }
        candidates.push(PathBuf::from(CONFIG_FILE));
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(CONFIG_FILE));
        }

        let mut config = WikiConfig::default();
        for path in candidates {
            if path.is_file() {
                config = Self::load(&path)?;
                break;
            }
        }

        if let Some(dir) = dir {
            config.diary_dir = dir.to_path_buf();
        }
        Ok(config)
    }

    /// Parse one specific config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| WikiError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WikiConfig::default();
        assert_eq!(config.recent_window_days, 90);
        assert_eq!(config.timeline_limit, 5);
        assert!(config.diary_dir.ends_with("diary"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"recent_window_days": 30}"#).unwrap();
        let config = WikiConfig::load(&path).unwrap();
        assert_eq!(config.recent_window_days, 30);
        assert_eq!(config.timeline_limit, 5);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            WikiConfig::load(&path),
            Err(WikiError::Config { .. })
        ));
    }

    #[test]
    fn test_discover_prefers_explicit_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"diary_dir": "/somewhere/else", "timeline_limit": 9}"#,
        )
        .unwrap();
        let config = WikiConfig::discover(Some(dir.path())).unwrap();
        // the explicit directory wins over the configured one
        assert_eq!(config.diary_dir, dir.path());
        assert_eq!(config.timeline_limit, 9);
    }
}
