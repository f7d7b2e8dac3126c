//! Message schema between execution contexts.
//!
//! The orchestrator, the presentation layer, and the destination-page injector
//! share no memory; they exchange these tagged messages. Every inbound message
//! is deserialized against this schema before the orchestrator acts on it -
//! ad hoc field access is not allowed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::intent::Intent;

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;

/// Inbound messages consumed by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum OrchestratorMessage {
    /// Scraped conversation blob from the source page, plus the page URL for
    /// history attribution.
    #[serde(rename_all = "camelCase")]
    SummarizeContext { context: String, source_url: String },

    /// Explicit platform override from the presentation layer.
    #[serde(rename_all = "camelCase")]
    ReHandOff {
        summary: String,
        target_platform: String,
        intent: Intent,
    },
}

impl OrchestratorMessage {
    /// Validate and decode a raw inbound message.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ProtocolError> {
        serde_json::from_value(value).map_err(|e| ProtocolError::InvalidMessage(e.to_string()))
    }
}

/// Outbound events produced by the orchestrator for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum PanelEvent {
    /// A classification completed; carries the display text, the full
    /// platform table (so every platform can be offered, not just the
    /// suggestion), the bare summary, and the intent.
    #[serde(rename_all = "camelCase")]
    DisplaySummary {
        summary_text: String,
        llm_options: BTreeMap<String, String>,
        base_summary: String,
        intent: Intent,
    },

    /// A hand-off step failed with a human-readable message.
    DisplayError { error: String },
}

/// Message delivered to the destination-page injector context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectPrompt {
    pub prompt: String,
}
