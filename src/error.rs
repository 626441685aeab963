//! Error types for nuclei-boards
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Board catalog and manifest errors
#[derive(Error, Debug)]
pub enum BoardError {
    /// Board not found
    #[error("Board '{name}' not found in catalog")]
    NotFound { name: String },

    /// Boards directory does not exist
    #[error("Boards directory not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Manifest file could not be parsed
    #[error("Failed to parse board manifest '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// Manifest file name does not yield a board id
    #[error("Cannot derive a board id from '{path}'")]
    InvalidId { path: PathBuf },
}

/// Debug tool derivation errors
///
/// Raised per board. Whether a failure aborts a batch is up to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebugError {
    /// A protocol needs a board attribute the manifest does not declare
    #[error("Board '{board}' is missing required field '{field}'")]
    MissingBoardAttribute { board: String, field: String },

    /// A package needed to locate debugger scripts is not installed
    #[error("Package '{package}' required by board '{board}' is not installed")]
    PackageNotInstalled { board: String, package: String },
}

impl DebugError {
    /// Id of the board the error refers to
    pub fn board(&self) -> &str {
        match self {
            Self::MissingBoardAttribute { board, .. } | Self::PackageNotInstalled { board, .. } => {
                board
            }
        }
    }
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to list directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },
}

/// Top-level nuclei-boards error type
#[derive(Error, Debug)]
pub enum NucleiError {
    /// Board error
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// Debug derivation error
    #[error("Debug configuration error: {0}")]
    Debug(#[from] DebugError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}
