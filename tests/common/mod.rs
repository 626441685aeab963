//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Test workspace context
///
/// A temporary directory holding a `boards/` catalog, a `packages/` root
/// with an installed Nuclei SDK, and an isolated config directory.
pub struct TestWorkspace {
    /// Temporary directory for the workspace
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create a new workspace with empty boards, packages and config dirs
    pub fn new() -> Self {
        let workspace = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        workspace.create_dir("boards");
        workspace.create_dir("packages/framework-nuclei-sdk");
        workspace.create_dir("config");
        workspace
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn boards_dir(&self) -> PathBuf {
        self.dir.path().join("boards")
    }

    pub fn packages_dir(&self) -> PathBuf {
        self.dir.path().join("packages")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn sdk_dir(&self) -> PathBuf {
        self.packages_dir().join("framework-nuclei-sdk")
    }

    /// Create a file in the workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the workspace
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Add a board manifest to the catalog
    pub fn add_board(&self, id: &str, manifest: &str) {
        self.create_file(&format!("boards/{id}.json"), manifest);
    }

    /// Add a board-specific OpenOCD script to the SDK
    pub fn add_sdk_script(&self, soc: &str, board: &str, file: &str) -> PathBuf {
        let rel = format!("packages/framework-nuclei-sdk/SoC/{soc}/Board/{board}/{file}");
        self.create_file(&rel, "# openocd script\n");
        self.sdk_dir()
            .join("SoC")
            .join(soc)
            .join("Board")
            .join(board)
            .join(file)
    }

    /// Read a file from the workspace
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// GD32VF103V RV-STAR manifest
pub const RVSTAR_BOARD: &str = r#"{
  "build": {
    "f_cpu": "108000000L",
    "mcu": "GD32VF103VBT6",
    "soc": "gd32vf103"
  },
  "debug": {
    "jlink_device": "GD32VF103VBT6",
    "onboard_tools": ["rv-link"],
    "svd_path": "GD32VF103.svd"
  },
  "frameworks": ["nuclei-sdk"],
  "name": "GD32VF103V RV-STAR",
  "upload": {
    "maximum_ram_size": 32768,
    "protocol": "rv-link",
    "protocols": ["rv-link", "gd-link", "jlink", "altera-usb-blaster", "um232h", "serial"]
  },
  "vendor": "Nuclei"
}"#;

/// Nuclei evaluation SoC board manifest
pub const EVALSOC_BOARD: &str = r#"{
  "build": {
    "mcu": "evalsoc",
    "soc": "evalsoc"
  },
  "debug": {
    "jlink_device": "N300",
    "onboard_tools": ["nuclei-rv-debugger"],
    "default_tools": ["nuclei-rv-debugger"]
  },
  "name": "Nuclei DDR200T",
  "upload": {
    "protocol": "nuclei-rv-debugger",
    "protocols": ["nuclei-rv-debugger", "jlink"]
  },
  "vendor": "Nuclei"
}"#;

/// Board that requests J-Link but does not name a device
pub const NO_DEVICE_BOARD: &str = r#"{
  "build": {"soc": "hbird"},
  "name": "Broken HBird",
  "upload": {"protocol": "jlink", "protocols": []}
}"#;
