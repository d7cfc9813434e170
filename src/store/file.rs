//! JSON file record store
//!
//! The whole store is one JSON document. Every `load` reads and parses the
//! file from scratch; every `save` rewrites it in full. Writes go to a
//! sibling temp file which is fsynced and renamed over the original, so a
//! crash mid-write leaves the previous document intact.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::RecordStore;
use crate::record::{StoreDocument, UserRecord};

/// Record store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens a store at `path`. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty document (`{"users": []}`).
    ///
    /// Overwrites whatever is at the path.
    pub fn initialize(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }
        self.write_document(&StoreDocument::empty())
    }

    /// Reads and parses the full document
    pub fn read_document(&self) -> StoreResult<StoreDocument> {
        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;

        serde_json::from_str(&content).map_err(|e| StoreError::malformed(&self.path, e.to_string()))
    }

    /// Rewrites the full document
    pub fn write_document(&self, document: &StoreDocument) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::malformed(&self.path, e.to_string()))?;

        let tmp_path = self.tmp_path();

        let mut file = File::create(&tmp_path).map_err(|e| StoreError::io(&tmp_path, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        file.sync_all().map_err(|e| StoreError::io(&tmp_path, e))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        // fsync parent directory so the rename is durable
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Ok(dir) = OpenOptions::new().read(true).open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<UserRecord>> {
        Ok(self.read_document()?.users)
    }

    fn save(&self, records: &[UserRecord]) -> StoreResult<()> {
        // Keep sibling collections from the current document, if readable
        let mut document = match self.read_document() {
            Ok(doc) => doc,
            Err(StoreError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                StoreDocument::empty()
            }
            Err(e) => return Err(e),
        };
        document.users = records.to_vec();
        self.write_document(&document)
    }
}
