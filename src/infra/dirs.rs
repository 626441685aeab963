//! Platform-specific directory management
//!
//! Provides the config directory and the root under which packages
//! (Nuclei SDK, OpenOCD, J-Link) are installed.
//!
//! Environment variables can override default directories:
//! - `NUCLEI_BOARDS_CONFIG_DIR` - Override config directory
//! - `NUCLEI_BOARDS_PACKAGES_DIR` - Override packages root

use std::env;
use std::path::PathBuf;

/// Environment variable names for directory overrides
pub const ENV_CONFIG_DIR: &str = "NUCLEI_BOARDS_CONFIG_DIR";
pub const ENV_PACKAGES_DIR: &str = "NUCLEI_BOARDS_PACKAGES_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "nuclei-boards";

/// Where PlatformIO keeps installed packages, relative to the home directory
const PLATFORMIO_PACKAGES: [&str; 2] = [".platformio", "packages"];

/// Platform-specific directory provider
#[derive(Debug, Clone)]
pub struct NucleiDirs {
    config_dir: PathBuf,
    packages_dir: PathBuf,
}

impl NucleiDirs {
    /// Create a new `NucleiDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
            packages_dir: Self::resolve_packages_dir(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/nuclei-boards` or `~/.config/nuclei-boards`
    /// - macOS: `~/Library/Application Support/nuclei-boards`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the packages root (`~/.platformio/packages` by default)
    #[must_use]
    pub fn packages_dir(&self) -> PathBuf {
        self.packages_dir.clone()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }

    fn resolve_packages_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_PACKAGES_DIR) {
            return PathBuf::from(path);
        }

        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        PLATFORMIO_PACKAGES
            .iter()
            .fold(home, |path, part| path.join(part))
    }
}

impl Default for NucleiDirs {
    fn default() -> Self {
        Self::new()
    }
}
