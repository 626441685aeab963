//! Board catalog
//!
//! Loads every `<board>.json` manifest from a boards directory and hands
//! out single boards or the whole set, optionally passed through the
//! debug tool derivation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::board::Board;
use super::debug::DebugConfigDeriver;
use crate::error::{BoardError, DebugError, FilesystemError, NucleiError};

/// Boards keyed by id
#[derive(Debug, Clone, Default)]
pub struct BoardCatalog {
    dir: PathBuf,
    boards: BTreeMap<String, Board>,
}

impl BoardCatalog {
    /// Load all manifests directly inside `dir`
    pub fn from_dir(dir: &Path) -> Result<Self, NucleiError> {
        if !dir.is_dir() {
            return Err(BoardError::CatalogNotFound {
                path: dir.to_path_buf(),
            }
            .into());
        }

        let mut boards = BTreeMap::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| FilesystemError::ReadDir {
                path: dir.to_path_buf(),
                error: e.to_string(),
            })?;

            let path = entry.path();
            let is_manifest = path.extension().and_then(|e| e.to_str()) == Some("json");
            if !entry.file_type().is_file() || !is_manifest {
                continue;
            }

            let board = Board::from_path(path)?;
            tracing::trace!("Loaded board '{}' from {}", board.id, path.display());
            boards.insert(board.id.clone(), board);
        }

        tracing::info!("Loaded {} board(s) from {}", boards.len(), dir.display());

        Ok(Self {
            dir: dir.to_path_buf(),
            boards,
        })
    }

    /// Build a catalog from boards already in memory
    pub fn from_boards(boards: impl IntoIterator<Item = Board>) -> Self {
        Self {
            dir: PathBuf::new(),
            boards: boards.into_iter().map(|b| (b.id.clone(), b)).collect(),
        }
    }

    /// Directory the catalog was loaded from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Look up one board
    pub fn board(&self, id: &str) -> Result<&Board, BoardError> {
        self.boards
            .get(id)
            .ok_or_else(|| BoardError::NotFound {
                name: id.to_string(),
            })
    }

    /// All boards, ordered by id
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.values()
    }

    /// All board ids, ordered
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.boards.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// One board (when `id` is given) or all boards, with debug tools derived
    ///
    /// Each board's outcome is reported separately so the caller decides
    /// whether one failure aborts the rest.
    pub fn get_boards(
        &self,
        deriver: &DebugConfigDeriver<'_>,
        id: Option<&str>,
    ) -> Result<Vec<(String, Result<Board, DebugError>)>, BoardError> {
        let selected: BTreeMap<String, Board> = match id {
            Some(id) => {
                let board = self.board(id)?;
                BTreeMap::from([(board.id.clone(), board.clone())])
            }
            None => self.boards.clone(),
        };

        Ok(deriver.derive_each(selected))
    }
}
