//! File-backed save store.
//!
//! `SaveStore` owns a storage root passed in at construction; nothing here
//! reads an ambient global save directory. Each save is a single flat JSON
//! file holding one `CreatureSnapshot`. Deleting a save file never touches a
//! creature already loaded in memory.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::snapshot::{CreatureSnapshot, SnapshotError};
use crate::core::Creature;

/// File extension for save files.
const SAVE_EXTENSION: &str = "json";

/// Errors at the persistence boundary.
///
/// The engine itself has no error paths; everything that can go wrong lives
/// here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save `{name}` not found")]
    NotFound { name: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed save file: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),
}

/// A directory of creature save files.
#[derive(Clone, Debug)]
pub struct SaveStore {
    root: PathBuf,
}

impl SaveStore {
    /// Create a store rooted at `root`. The directory is created on demand
    /// by `save`; constructing the store never touches the filesystem.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist a creature under `name` (".json" appended when missing).
    ///
    /// Creates the storage root if it does not exist. Returns the path the
    /// snapshot was written to.
    pub fn save(&self, name: &str, creature: &Creature) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.root)?;

        let path = self.save_path(name);
        let snapshot = CreatureSnapshot::capture(creature);
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&path, json)?;

        debug!(path = %path.display(), "saved creature snapshot");
        Ok(path)
    }

    /// Load and reconstruct the creature saved under `name`.
    ///
    /// ## Errors
    ///
    /// `NotFound` for a missing file, `Deserialization` for malformed JSON,
    /// `InvalidSnapshot` for a record that violates creature invariants.
    /// A failed load never mutates anything.
    pub fn load(&self, name: &str) -> Result<Creature, StoreError> {
        let path = self.save_path(name);
        if !path.is_file() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }

        let json = fs::read_to_string(&path)?;
        let snapshot: CreatureSnapshot = serde_json::from_str(&json)?;
        let creature = snapshot.restore()?;

        debug!(path = %path.display(), "loaded creature snapshot");
        Ok(creature)
    }

    /// List save names (file stems), sorted. An absent root lists as empty.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == SAVE_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Delete the save file under `name`.
    ///
    /// Does not affect any creature already loaded in memory.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.save_path(name);
        if !path.is_file() {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }

        fs::remove_file(&path)?;
        debug!(path = %path.display(), "deleted creature snapshot");
        Ok(())
    }

    fn save_path(&self, name: &str) -> PathBuf {
        let filename = if name.ends_with(&format!(".{SAVE_EXTENSION}")) {
            name.to_string()
        } else {
            format!("{name}.{SAVE_EXTENSION}")
        };
        self.root.join(filename)
    }
}
