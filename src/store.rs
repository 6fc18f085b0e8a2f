//! File-backed store for the ranking document.
//!
//! The store is the sole writer of its file. Writes go to a sibling temp
//! file and are renamed into place, so a reader never observes a
//! half-written document. Serializing mutations (load-mutate-save) is the
//! caller's responsibility; the web binary holds a write lock across the
//! whole sequence.

use crate::models::RankingDocument;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from loading, saving, or importing the document.
#[derive(Debug)]
pub enum StoreError {
    /// The file exists but its bytes do not parse as a ranking document.
    /// A missing file is initialized instead; existing data is never
    /// silently replaced.
    Corrupt(serde_json::Error),
    /// An import payload does not have the ranking-document shape.
    InvalidImport(serde_json::Error),
    /// The underlying file could not be read or written.
    Storage(io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Corrupt(e) => {
                write!(f, "Stored data is not a valid ranking document: {}", e)
            }
            StoreError::InvalidImport(e) => {
                write!(f, "Import payload is not a valid ranking document: {}", e)
            }
            StoreError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Storage(e)
    }
}

/// Load/save of the whole ranking document against one JSON file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given file path. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current document. A missing file is initialized to the empty
    /// document and persisted; existing bytes that fail to parse are a
    /// `Corrupt` error.
    pub fn load(&self) -> Result<RankingDocument, StoreError> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let doc = RankingDocument::new();
                self.save(&doc)?;
                return Ok(doc);
            }
            Err(e) => return Err(StoreError::Storage(e)),
        };
        serde_json::from_slice(&raw).map_err(StoreError::Corrupt)
    }

    /// Write the whole document, replacing prior content. The bytes go to a
    /// temp file in the same directory, then rename over the target.
    pub fn save(&self, doc: &RankingDocument) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec_pretty(doc).map_err(|e| StoreError::Storage(e.into()))?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, &bytes)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// The exact persisted bytes, for download. Initializes the file first
    /// if it does not exist yet.
    pub fn export_raw(&self) -> Result<Vec<u8>, StoreError> {
        match std::fs::read(&self.path) {
            Ok(raw) => Ok(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.load()?;
                std::fs::read(&self.path).map_err(StoreError::Storage)
            }
            Err(e) => Err(StoreError::Storage(e)),
        }
    }

    /// Replace the persisted document wholesale with caller-supplied content.
    /// The payload must have the document shape; nothing is merged and no
    /// referential checks run between matches and players.
    pub fn import_raw(&self, raw: serde_json::Value) -> Result<(), StoreError> {
        let doc: RankingDocument =
            serde_json::from_value(raw).map_err(StoreError::InvalidImport)?;
        self.save(&doc)
    }
}
