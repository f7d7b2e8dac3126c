//! # Capsule Protocols
//!
//! Typed message schema and trait seams for the Capsule hand-off orchestrator.
//! Contains only definitions - no implementations.
//!
//! ## Core Concepts
//!
//! - [`Intent`] - closed classification of the user's conversational goal
//! - [`HandOff`] - resolved destination platform, URL, and composed prompt
//! - [`OrchestratorMessage`] / [`PanelEvent`] - the inbound/outbound message
//!   schema between the presentation layer and the orchestrator
//! - [`BrowserDriver`] - tab lifecycle, injection, and clipboard seam
//! - [`Classifier`] - remote summarize-and-classify seam
//! - [`HistoryStore`] - capped, most-recent-first hand-off log seam

pub mod browser;
pub mod classifier;
pub mod error;
pub mod handoff;
pub mod history;
pub mod intent;
pub mod message;

pub use browser::{BrowserDriver, InjectionOutcome, TabEvent, TabId, TabStatus};
pub use classifier::{ClassificationResult, Classifier};
pub use error::{BrowserError, ClassifierError, HistoryError, ProtocolError};
pub use handoff::{HandOff, HistoryEntry, HISTORY_CAP};
pub use history::HistoryStore;
pub use intent::Intent;
pub use message::{InjectPrompt, OrchestratorMessage, PanelEvent};
