//! Saved designs, templates and session autosave.
//!
//! The store is an opaque get/set of JSON document snapshots over a pluggable
//! key-value backend: files on disk for the application, an in-memory map for
//! tests. No schema versioning; documents saved by older builds load with
//! element defaults filled in.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::document::Document;
use crate::util::time;

const DESIGNS_KEY: &str = "designs";
const TEMPLATES_KEY: &str = "templates";

/// Errors from the persistence collaborator. Never fatal to an editing
/// session; callers log and continue with the in-memory document.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize design: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to access design store: {0}")]
    Io(#[from] std::io::Error),
}

/// One saved design or template record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDesign {
    pub id: Uuid,
    pub name: String,
    pub document: Document,
    /// Seconds since the Unix epoch.
    pub created_at: u64,
    pub updated_at: u64,
}

/// Key-value storage backend for serialized JSON payloads.
pub trait Backend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One JSON file per key inside a store directory.
pub struct FsBackend {
    dir: PathBuf,
}

impl FsBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are store-internal identifiers; keep them filesystem-safe.
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl Backend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory backend for tests and previews.
#[derive(Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store for named designs, named templates and per-session autosaves.
pub struct DesignStore {
    backend: Box<dyn Backend>,
}

impl DesignStore {
    pub fn on_disk(dir: impl AsRef<Path>) -> Self {
        Self {
            backend: Box::new(FsBackend::new(dir.as_ref())),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::new()),
        }
    }

    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    // --- named designs --------------------------------------------------

    pub fn save_design(
        &mut self,
        name: &str,
        document: &Document,
    ) -> Result<SavedDesign, StorageError> {
        self.save_record(DESIGNS_KEY, name, document)
    }

    /// Overwrite an existing design's document. Returns the updated record,
    /// or `None` if the id is unknown.
    pub fn update_design(
        &mut self,
        id: Uuid,
        document: &Document,
    ) -> Result<Option<SavedDesign>, StorageError> {
        self.update_record(DESIGNS_KEY, id, document)
    }

    pub fn designs(&self) -> Result<Vec<SavedDesign>, StorageError> {
        self.collection(DESIGNS_KEY)
    }

    pub fn design(&self, id: Uuid) -> Result<Option<SavedDesign>, StorageError> {
        Ok(self.collection(DESIGNS_KEY)?.into_iter().find(|d| d.id == id))
    }

    pub fn delete_design(&mut self, id: Uuid) -> Result<bool, StorageError> {
        self.delete_record(DESIGNS_KEY, id)
    }

    // --- templates ------------------------------------------------------

    pub fn save_template(
        &mut self,
        name: &str,
        document: &Document,
    ) -> Result<SavedDesign, StorageError> {
        self.save_record(TEMPLATES_KEY, name, document)
    }

    pub fn templates(&self) -> Result<Vec<SavedDesign>, StorageError> {
        self.collection(TEMPLATES_KEY)
    }

    pub fn template(&self, id: Uuid) -> Result<Option<SavedDesign>, StorageError> {
        Ok(self
            .collection(TEMPLATES_KEY)?
            .into_iter()
            .find(|d| d.id == id))
    }

    pub fn delete_template(&mut self, id: Uuid) -> Result<bool, StorageError> {
        self.delete_record(TEMPLATES_KEY, id)
    }

    // --- session autosave ----------------------------------------------

    /// Persist the working document under a session key (one slot per open
    /// template, mirroring the editor's autosave-on-change behavior).
    pub fn save_session(&mut self, key: &str, document: &Document) -> Result<(), StorageError> {
        let json = serde_json::to_string(document)?;
        self.backend.write(&session_key(key), &json)
    }

    /// Load a session document, or `None` when absent. A corrupt payload is
    /// treated as absent rather than failing the session.
    pub fn load_session(&self, key: &str) -> Result<Option<Document>, StorageError> {
        let Some(json) = self.backend.read(&session_key(key))? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(document) => Ok(Some(document)),
            Err(err) => {
                log::warn!("discarding unreadable session {key:?}: {err}");
                Ok(None)
            }
        }
    }

    pub fn clear_session(&mut self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(&session_key(key))
    }

    // --- shared record plumbing ----------------------------------------

    fn collection(&self, key: &str) -> Result<Vec<SavedDesign>, StorageError> {
        let Some(json) = self.backend.read(key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&json) {
            Ok(records) => Ok(records),
            Err(err) => {
                log::warn!("discarding unreadable {key} collection: {err}");
                Ok(Vec::new())
            }
        }
    }

    fn write_collection(
        &mut self,
        key: &str,
        records: &[SavedDesign],
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)?;
        self.backend.write(key, &json)
    }

    fn save_record(
        &mut self,
        key: &str,
        name: &str,
        document: &Document,
    ) -> Result<SavedDesign, StorageError> {
        let now = time::timestamp_secs();
        let record = SavedDesign {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            document: document.clone(),
            created_at: now,
            updated_at: now,
        };
        let mut records = self.collection(key)?;
        records.push(record.clone());
        self.write_collection(key, &records)?;
        Ok(record)
    }

    fn update_record(
        &mut self,
        key: &str,
        id: Uuid,
        document: &Document,
    ) -> Result<Option<SavedDesign>, StorageError> {
        let mut records = self.collection(key)?;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.document = document.clone();
        record.updated_at = time::timestamp_secs();
        let updated = record.clone();
        self.write_collection(key, &records)?;
        Ok(Some(updated))
    }

    fn delete_record(&mut self, key: &str, id: Uuid) -> Result<bool, StorageError> {
        let mut records = self.collection(key)?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.write_collection(key, &records)?;
        Ok(true)
    }
}

fn session_key(key: &str) -> String {
    format!("session_{key}")
}
