//! Installed package lookup
//!
//! Resolves package directories for the debug tool derivation: explicit
//! overrides first (e.g. `--sdk-dir`), then `<packages_root>/<name>`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::debug::PackageResolver;

/// Packages installed under a common root
#[derive(Debug, Clone, Default)]
pub struct InstalledPackages {
    root: PathBuf,
    overrides: HashMap<String, PathBuf>,
}

impl InstalledPackages {
    /// Resolve packages below `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overrides: HashMap::new(),
        }
    }

    /// Pin `name` to a specific directory, installed or not
    #[must_use]
    pub fn with_override(mut self, name: &str, dir: impl Into<PathBuf>) -> Self {
        self.overrides.insert(name.to_string(), dir.into());
        self
    }

    /// Packages root
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PackageResolver for InstalledPackages {
    fn package_dir(&self, name: &str) -> Option<PathBuf> {
        if let Some(dir) = self.overrides.get(name) {
            return Some(dir.clone());
        }

        let dir = self.root.join(name);
        if dir.is_dir() {
            Some(dir)
        } else {
            tracing::debug!("Package '{}' not found in {}", name, self.root.display());
            None
        }
    }
}
