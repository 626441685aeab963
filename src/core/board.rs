//! Board manifest handling
//!
//! Handles parsing of `<board>.json` files that describe a hardware target,
//! its upload protocols and its debugger configuration.
//!
//! Every section keeps keys it does not model in a flattened `extra` map,
//! so a manifest can be loaded, derived and written back without loss.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::BoardError;
use crate::infra::filesystem;

/// A board manifest together with its catalog id
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Board id (file stem of the manifest)
    pub id: String,

    /// Parsed manifest
    pub manifest: BoardManifest,
}

/// Complete board manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoardManifest {
    /// Human readable board name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Board vendor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Product page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Debug settings
    #[serde(default)]
    pub debug: DebugConfig,

    /// Upload settings
    #[serde(default)]
    pub upload: UploadConfig,

    /// Keys not modelled above (frameworks, connectivity, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Build section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BuildConfig {
    /// System-on-chip identifier (e.g. "gd32vf103", "evalsoc")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soc: Option<String>,

    /// MCU part number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcu: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Upload section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Default upload protocol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// All supported upload protocols, in preference order
    #[serde(default)]
    pub protocols: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Debug section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DebugConfig {
    /// Debug tools keyed by tool name
    #[serde(default)]
    pub tools: BTreeMap<String, DebugTool>,

    /// Device name passed to the J-Link GDB server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jlink_device: Option<String>,

    /// Tools built into the board hardware
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub onboard_tools: Vec<String>,

    /// Tools the board prefers by default
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_tools: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One debug tool entry
///
/// Absent fields are omitted on output: a probe that runs its own GDB
/// server has no `server` or `init_cmds`, and J-Link has no `default` flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DebugTool {
    /// Hardware ids (USB vendor/product) used to auto-detect the probe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hwids: Option<Vec<[String; 2]>>,

    /// Whether the consumer must ask for a debug port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_debug_port: Option<bool>,

    /// Debug server launch descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<DebugServer>,

    /// GDB commands issued after connecting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_cmds: Option<Vec<String>>,

    /// Tool is built into the board
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onboard: Option<bool>,

    /// Tool is the board's default choice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Debug server launch descriptor
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DebugServer {
    /// Package providing the executable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Executable, relative to the package directory
    pub executable: String,

    /// Command-line arguments (may contain `$PACKAGE_DIR`)
    #[serde(default)]
    pub arguments: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BoardManifest {
    /// Parse from JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize to pretty JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Board {
    /// Create a board from an id and a parsed manifest
    pub fn new(id: impl Into<String>, manifest: BoardManifest) -> Self {
        Self {
            id: id.into(),
            manifest,
        }
    }

    /// Parse a board from JSON text
    pub fn from_json(id: impl Into<String>, content: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(id, BoardManifest::from_json(content)?))
    }

    /// Load a board from `<id>.json`
    pub fn from_path(path: &Path) -> Result<Self, crate::error::NucleiError> {
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| BoardError::InvalidId {
                path: path.to_path_buf(),
            })?;

        let content = filesystem::read_file(path)?;
        let board = Self::from_json(id, &content).map_err(|e| BoardError::ParseError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Ok(board)
    }

    /// SoC identifier as used in script paths (trimmed, lower case)
    pub fn soc(&self) -> String {
        self.manifest
            .build
            .soc
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    }
}
