//! Snapshot Storage
//!
//! Durable persistence capability for the application snapshot.
//! Implementations can use a data-dir JSON file, in-memory, etc.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{DomainError, DomainResult, Snapshot, STORAGE_KEY};

/// Abstract durable storage for the one application snapshot
pub trait SnapshotStorage: Send + Sync {
    /// Load the last saved snapshot. `None` when nothing usable is stored
    /// (absent, unreadable or legacy data the current shape cannot decode).
    fn load(&self) -> Option<Snapshot>;

    /// Persist the snapshot wholesale, replacing whatever was there.
    fn save(&self, snapshot: &Snapshot) -> DomainResult<()>;
}

impl<T: SnapshotStorage + ?Sized> SnapshotStorage for Arc<T> {
    fn load(&self) -> Option<Snapshot> {
        (**self).load()
    }

    fn save(&self, snapshot: &Snapshot) -> DomainResult<()> {
        (**self).save(snapshot)
    }
}

/// File-backed storage: one JSON file named after the fixed storage key,
/// kept under the application data directory.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn load(&self) -> Option<Snapshot> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::warn!(
                    "discarding undecodable snapshot at {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> DomainResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| DomainError::Storage(e.to_string()))?;
        }
        let json = serde_json::to_string(snapshot).map_err(|e| DomainError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| DomainError::Storage(e.to_string()))
    }
}

/// In-memory storage holding the serialized blob, for tests and previews.
/// Serializes like the real backend so shape bugs still show up.
#[derive(Default)]
pub struct MemoryStorage {
    blob: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized blob, as a file-backed store would have written it
    pub fn raw(&self) -> Option<String> {
        self.blob.lock().unwrap().clone()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self) -> Option<Snapshot> {
        let blob = self.blob.lock().unwrap();
        blob.as_deref().and_then(|raw| serde_json::from_str(raw).ok())
    }

    fn save(&self, snapshot: &Snapshot) -> DomainResult<()> {
        let json = serde_json::to_string(snapshot).map_err(|e| DomainError::Storage(e.to_string()))?;
        *self.blob.lock().unwrap() = Some(json);
        Ok(())
    }
}
