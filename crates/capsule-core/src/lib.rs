//! # Capsule Core
//!
//! Domain logic for the Capsule hand-off orchestrator:
//!
//! - [`selectors`] - per-site DOM selector tables (pure data)
//! - [`transcript`] - conversation turn assembly with raw-text fallback
//! - [`resolver`] - intent/platform resolution into [`HandOff`] records
//! - [`orchestrator`] - the pending-injection state machine
//! - [`history`] - capped, most-recent-first hand-off log implementations
//!
//! Everything here is browser-agnostic; page-context work goes through the
//! [`capsule_protocols::BrowserDriver`] seam.
//!
//! [`HandOff`]: capsule_protocols::HandOff

pub mod history;
pub mod orchestrator;
pub mod pending;
pub mod resolver;
pub mod selectors;
pub mod transcript;

pub use history::{FileHistoryStore, MemoryHistoryStore};
pub use orchestrator::Orchestrator;
pub use pending::{HandoffState, PendingInjection, PendingSlot};
pub use selectors::{InjectSelectors, ScrapeSelectors, SiteMatch};
pub use transcript::{ConversationTurn, Role};
