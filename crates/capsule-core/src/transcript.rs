//! Conversation transcript assembly.
//!
//! Turns extracted from the source page are flattened into a single delimited
//! blob for the classifier. When extraction yields nothing (unsupported site,
//! or selectors that matched zero usable turns), the page's whole visible text
//! is shipped instead under an explicit raw-dump header so the classifier can
//! still infer roles. Degraded fallback is a success, never an error.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;

/// Delimiter between transcript segments.
pub const TURN_DELIMITER: &str = "\n---\n";

/// Header line marking a raw-text fallback blob.
pub const FALLBACK_HEADER: &str = "--- RAW PAGE TEXT DUMP (NO ROLES) ---";

/// Instruction for the classifier when it receives a raw dump.
pub const FALLBACK_INSTRUCTION: &str = "Please analyze the text below. Infer the conversation \
     roles (USER/ASSISTANT) and extract the core dialogue before summarizing.";

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Assistant,
    Unknown,
}

impl Role {
    pub fn tag(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Assistant => "ASSISTANT",
            Role::Unknown => "UNKNOWN",
        }
    }
}

/// One scraped conversation turn. Ephemeral: joined into the transcript blob
/// and discarded, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

impl ConversationTurn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Flatten scraped turns into the single blob sent to the classifier.
///
/// `page_text` is the page's whole visible text, used only on the fallback
/// path.
pub fn assemble_transcript(turns: &[ConversationTurn], page_text: &str) -> String {
    let lines: Vec<String> = turns
        .iter()
        .filter(|turn| !turn.text.trim().is_empty())
        .map(|turn| format!("{}: {}", turn.role.tag(), turn.text.trim()))
        .collect();

    if lines.is_empty() {
        return [FALLBACK_HEADER, FALLBACK_INSTRUCTION, page_text].join(TURN_DELIMITER);
    }

    lines.join(TURN_DELIMITER)
}
