//! Intent classification labels.
//!
//! The classifier is constrained to a closed enumeration; anything outside it
//! is a malformed response. A response that omits the field entirely degrades
//! to [`Intent::Unknown`] rather than failing the whole hand-off.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "intent_tests.rs"]
mod tests;

/// Closed-set classification of the user's conversational goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    CodingAndDebugging,
    ResearchAndAnalysis,
    CreativeWriting,
    PlanningAndStrategy,
    GeneralKnowledge,
    /// Fallback label substituted when a classify response omits `intent`.
    /// Never accepted from the wire.
    #[serde(rename = "UNKNOWN_INTENT")]
    Unknown,
}

impl Intent {
    /// The closed set the remote classifier may return.
    pub const CLASSIFIABLE: [Intent; 5] = [
        Intent::CodingAndDebugging,
        Intent::ResearchAndAnalysis,
        Intent::CreativeWriting,
        Intent::PlanningAndStrategy,
        Intent::GeneralKnowledge,
    ];

    /// Wire name (SCREAMING_SNAKE_CASE).
    pub fn wire_name(&self) -> &'static str {
        match self {
            Intent::CodingAndDebugging => "CODING_AND_DEBUGGING",
            Intent::ResearchAndAnalysis => "RESEARCH_AND_ANALYSIS",
            Intent::CreativeWriting => "CREATIVE_WRITING",
            Intent::PlanningAndStrategy => "PLANNING_AND_STRATEGY",
            Intent::GeneralKnowledge => "GENERAL_KNOWLEDGE",
            Intent::Unknown => "UNKNOWN_INTENT",
        }
    }

    /// Human-readable label with underscores replaced by spaces
    /// (e.g. "CODING AND DEBUGGING"). Used in composed hand-off prompts.
    pub fn label(&self) -> String {
        self.wire_name().replace('_', " ")
    }

    /// Parse a value from the remote classifier. Only the classifiable set is
    /// accepted; `UNKNOWN_INTENT` and arbitrary strings are rejected.
    pub fn parse_wire(value: &str) -> Option<Intent> {
        Intent::CLASSIFIABLE
            .into_iter()
            .find(|intent| intent.wire_name() == value)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
