//! Hand-off history stores.
//!
//! An in-memory store for tests and a file-backed store persisting the log as
//! a single JSON document. Both keep entries most-recent-first and evict the
//! oldest past the cap.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use capsule_protocols::{HISTORY_CAP, HistoryEntry, HistoryError, HistoryStore};

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;

fn push_capped(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry, cap: usize) {
    entries.insert(0, entry);
    entries.truncate(cap);
}

/// In-memory history store for testing.
pub struct MemoryHistoryStore {
    entries: RwLock<Vec<HistoryEntry>>,
    cap: usize,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::with_cap(HISTORY_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            cap,
        }
    }
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut entries = self.entries.write().await;
        push_capped(&mut entries, entry, self.cap);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.read().await.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), HistoryError> {
        let mut entries = self.entries.write().await;
        entries.retain(|entry| entry.id != id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

/// File-backed history store.
///
/// The whole log lives in one JSON file (`history.json` by convention);
/// every mutation rewrites the document. Fine at a 50-entry cap.
pub struct FileHistoryStore {
    path: PathBuf,
    cap: usize,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_cap(path, HISTORY_CAP)
    }

    pub fn with_cap(path: impl Into<PathBuf>, cap: usize) -> Self {
        Self {
            path: path.into(),
            cap,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), count = entries.len(), "history persisted");
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        push_capped(&mut entries, entry, self.cap);
        self.persist(&entries).await
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        self.load().await
    }

    async fn delete(&self, id: i64) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            debug!(id, "history entry not found for deletion");
            return Ok(());
        }
        self.persist(&entries).await
    }

    async fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        self.persist(&[]).await
    }
}
