//! Global configuration management
//!
//! Reads settings from `config.toml` in the config directory: where board
//! manifests and packages live, and how batch derivation treats failures.
//! Command-line flags and environment variables take precedence.

use crate::infra::dirs::NucleiDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for nuclei-boards
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlobalConfig {
    /// Directory settings
    #[serde(default)]
    pub paths: PathsConfig,

    /// Batch derivation settings
    #[serde(default)]
    pub derive: DeriveConfig,
}

/// Directory settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Directory holding `<board>.json` manifests
    pub boards_dir: Option<PathBuf>,

    /// Root of installed packages
    pub packages_dir: Option<PathBuf>,

    /// Nuclei SDK location, bypassing package lookup
    pub sdk_dir: Option<PathBuf>,
}

/// Batch derivation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeriveConfig {
    /// Continue with remaining boards when one fails
    pub keep_going: Option<bool>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    pub fn load(dirs: &NucleiDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Get the effective boards directory
    #[must_use]
    pub fn boards_dir(&self) -> PathBuf {
        self.paths
            .boards_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::config::defaults::DEFAULT_BOARDS_DIR))
    }

    /// Get the effective packages root
    #[must_use]
    pub fn packages_dir(&self, dirs: &NucleiDirs) -> PathBuf {
        self.paths
            .packages_dir
            .clone()
            .unwrap_or_else(|| dirs.packages_dir())
    }

    /// Whether batch derivation continues past failing boards
    #[must_use]
    pub fn keep_going(&self) -> bool {
        self.derive.keep_going.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert!(config.paths.boards_dir.is_none());
        assert!(config.paths.sdk_dir.is_none());
        assert_eq!(config.boards_dir(), PathBuf::from("boards"));
        assert!(!config.keep_going());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = GlobalConfig::load_from_path(&config_path).unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let content = r#"
[paths]
boards_dir = "/srv/nuclei/boards"
sdk_dir = "/opt/nuclei-sdk"

[derive]
keep_going = true
"#;
        fs::write(&config_path, content).unwrap();

        let config = GlobalConfig::load_from_path(&config_path).unwrap();
        assert_eq!(config.boards_dir(), PathBuf::from("/srv/nuclei/boards"));
        assert_eq!(config.paths.sdk_dir, Some(PathBuf::from("/opt/nuclei-sdk")));
        assert!(config.paths.packages_dir.is_none());
        assert!(config.keep_going());
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "invalid toml [[[").unwrap();

        let result = GlobalConfig::load_from_path(&config_path);
        assert!(matches!(result, Err(GlobalConfigError::ParseError { .. })));
    }

    #[test]
    fn test_packages_dir_falls_back_to_platform_default() {
        let dirs = NucleiDirs::new();
        let config = GlobalConfig::default();
        assert_eq!(config.packages_dir(&dirs), dirs.packages_dir());

        let config = GlobalConfig {
            paths: PathsConfig {
                packages_dir: Some(PathBuf::from("/pkgs")),
                ..PathsConfig::default()
            },
            ..GlobalConfig::default()
        };
        assert_eq!(config.packages_dir(&dirs), PathBuf::from("/pkgs"));
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = GlobalConfig {
            paths: PathsConfig {
                packages_dir: Some(PathBuf::from("/opt/pio/packages")),
                ..PathsConfig::default()
            },
            derive: DeriveConfig {
                keep_going: Some(true),
            },
        };
        fs::write(&config_path, toml::to_string(&config).unwrap()).unwrap();

        let loaded = GlobalConfig::load_from_path(&config_path).unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.keep_going());
    }
}
