//! History store seam.

use async_trait::async_trait;

use crate::error::HistoryError;
use crate::handoff::HistoryEntry;

/// Capped, most-recent-first log of past hand-offs.
///
/// The store exclusively owns its entries; it is written once per completed
/// classification and read/deleted by the presentation layer.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append an entry to the front, evicting the oldest past the cap.
    async fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError>;

    /// List entries, most recent first.
    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Delete exactly one entry by identifier. Unknown ids are a no-op.
    async fn delete(&self, id: i64) -> Result<(), HistoryError>;

    /// Remove all entries.
    async fn clear(&self) -> Result<(), HistoryError>;
}
