//! Browser driver seam: tab lifecycle, injection, and clipboard fallback.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::error::BrowserError;

/// Browser tab/target identifier.
pub type TabId = String;

/// Tab load status as observed by the lifecycle watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabStatus {
    Loading,
    Complete,
}

/// A tab lifecycle event. The watcher may report events for unrelated tabs;
/// consumers must filter by identifier and URL before acting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEvent {
    pub tab_id: TabId,
    pub url: String,
    pub status: TabStatus,
}

impl TabEvent {
    pub fn complete(tab_id: impl Into<TabId>, url: impl Into<String>) -> Self {
        Self {
            tab_id: tab_id.into(),
            url: url.into(),
            status: TabStatus::Complete,
        }
    }
}

/// Result of an injection attempt into a destination page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjectionOutcome {
    /// Text inserted and the send control clicked.
    Sent,
    /// Text inserted but the send control was missing or disabled; manual
    /// send required. Not an error.
    InsertedOnly,
    /// Input control not found at all; the caller must fall back to the
    /// clipboard.
    InputNotFound,
}

/// Driver for the browser the orchestrator controls.
///
/// Implementations run the page-context work (scrape scripts, injection
/// scripts) and surface tab lifecycle events; the orchestrator itself never
/// touches the browser directly.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Open a new tab at the given URL and return its identifier.
    async fn open_tab(&self, url: &str) -> Result<TabId, BrowserError>;

    /// Subscribe to tab lifecycle events.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<TabEvent>;

    /// Inject the prompt into the destination page and attempt to send it.
    async fn inject(
        &self,
        tab_id: &TabId,
        platform: &str,
        prompt: &str,
    ) -> Result<InjectionOutcome, BrowserError>;

    /// Copy text to the system clipboard (injection fallback).
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), BrowserError>;
}
