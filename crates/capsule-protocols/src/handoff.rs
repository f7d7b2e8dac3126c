//! Hand-off and history records.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;

#[cfg(test)]
#[path = "handoff_tests.rs"]
mod tests;

/// Maximum number of persisted history entries. Oldest entries past the cap
/// are silently evicted.
pub const HISTORY_CAP: usize = 50;

/// Resolved hand-off target: destination platform, URL, and the composed
/// prompt to inject or copy.
///
/// Derived deterministically from `(summary, target platform, intent)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOff {
    /// Platform display name (e.g. "ChatGPT"), or the `"Error"` sentinel.
    pub platform: String,
    /// Destination URL. For the pre-fill platform this already carries the
    /// URL-encoded prompt; empty for the error sentinel.
    pub url: String,
    /// Full composed hand-off prompt.
    pub prompt_to_copy: String,
}

impl HandOff {
    /// Sentinel returned for an unknown platform name. Callers must branch on
    /// this instead of opening a tab.
    pub fn error_sentinel() -> Self {
        Self {
            platform: "Error".to_string(),
            url: String::new(),
            prompt_to_copy: "Error: Unknown platform".to_string(),
        }
    }

    /// Whether this hand-off is the unknown-platform sentinel.
    pub fn is_error(&self) -> bool {
        self.platform == "Error"
    }
}

/// One persisted hand-off record, created once per completed classification
/// (not per injection attempt).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Identifier: epoch milliseconds at creation time.
    pub id: i64,
    pub summary: String,
    pub intent: Intent,
    pub platform_suggested: String,
    pub source_url: String,
    pub date_formatted: String,
    pub full_prompt: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        summary: impl Into<String>,
        intent: Intent,
        platform_suggested: impl Into<String>,
        source_url: impl Into<String>,
        full_prompt: impl Into<String>,
    ) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: now.timestamp_millis(),
            summary: summary.into(),
            intent,
            platform_suggested: platform_suggested.into(),
            source_url: source_url.into(),
            date_formatted: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            full_prompt: full_prompt.into(),
        }
    }
}
