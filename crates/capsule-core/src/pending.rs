//! The pending-injection slot.
//!
//! A single-slot request queue (capacity 1) with explicit overwrite
//! semantics: at most one hand-off is in flight, and a new request replaces
//! the old one rather than queueing behind it.

use std::time::Instant;

use capsule_protocols::{TabEvent, TabId, TabStatus};
use tracing::debug;

/// The in-flight record describing which destination tab/platform is awaiting
/// injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingInjection {
    /// Exact tab to match. `None` on the suggested-platform path, where no
    /// tab has been opened yet and matching falls back to URL substrings.
    pub tab_id: Option<TabId>,
    /// Lowercased platform name; doubles as the URL match fragment.
    pub platform: String,
    /// Composed hand-off prompt to deliver.
    pub prompt: String,
    /// Substring matching is only honored until this instant. Ignored when a
    /// tab id is recorded.
    pub deadline: Instant,
}

/// Observable orchestrator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffState {
    Idle,
    AwaitingTab,
}

/// Capacity-1 queue holding the pending injection, owned by the orchestrator.
#[derive(Debug, Default)]
pub struct PendingSlot {
    slot: Option<PendingInjection>,
}

impl PendingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HandoffState {
        if self.slot.is_some() {
            HandoffState::AwaitingTab
        } else {
            HandoffState::Idle
        }
    }

    /// Store a pending injection, returning the record it displaced (if any)
    /// so the caller can log the overwrite.
    pub fn set(&mut self, pending: PendingInjection) -> Option<PendingInjection> {
        self.slot.replace(pending)
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Consume the slot if the tab event matches the awaited destination.
    ///
    /// A match requires a completed load with a non-empty URL, plus:
    /// - recorded tab id: exact id equality and the URL containing the
    ///   platform fragment, or
    /// - no recorded id: the URL containing the platform fragment, observed
    ///   before the deadline. Expired no-id records are dropped on the next
    ///   event.
    pub fn take_match(&mut self, event: &TabEvent, now: Instant) -> Option<PendingInjection> {
        if event.status != TabStatus::Complete || event.url.is_empty() {
            return None;
        }

        let pending = self.slot.as_ref()?;
        let url_matches = event.url.to_ascii_lowercase().contains(&pending.platform);

        match &pending.tab_id {
            Some(tab_id) => {
                if *tab_id == event.tab_id && url_matches {
                    return self.slot.take();
                }
            }
            None => {
                if now > pending.deadline {
                    debug!(platform = %pending.platform, "dropping expired pending injection");
                    self.slot = None;
                    return None;
                }
                if url_matches {
                    return self.slot.take();
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn pending(tab_id: Option<&str>, deadline: Instant) -> PendingInjection {
        PendingInjection {
            tab_id: tab_id.map(String::from),
            platform: "claude".to_string(),
            prompt: "prompt".to_string(),
            deadline,
        }
    }

    fn far_deadline() -> Instant {
        Instant::now() + Duration::from_secs(60)
    }

    #[test]
    fn test_empty_slot_is_idle() {
        let slot = PendingSlot::new();
        assert_eq!(slot.state(), HandoffState::Idle);
    }

    #[test]
    fn test_set_reports_overwrite() {
        let mut slot = PendingSlot::new();
        assert!(slot.set(pending(None, far_deadline())).is_none());
        assert_eq!(slot.state(), HandoffState::AwaitingTab);
        let displaced = slot.set(pending(Some("tab-2"), far_deadline()));
        assert!(displaced.is_some());
        assert!(displaced.unwrap().tab_id.is_none());
    }

    #[test]
    fn test_loading_events_never_match() {
        let mut slot = PendingSlot::new();
        slot.set(pending(Some("tab-1"), far_deadline()));
        let event = TabEvent {
            tab_id: "tab-1".to_string(),
            url: "https://claude.ai/chat/".to_string(),
            status: TabStatus::Loading,
        };
        assert!(slot.take_match(&event, Instant::now()).is_none());
        assert_eq!(slot.state(), HandoffState::AwaitingTab);
    }

    #[test]
    fn test_exact_id_match_requires_both_id_and_url() {
        let mut slot = PendingSlot::new();
        slot.set(pending(Some("tab-1"), far_deadline()));

        // Right id, wrong URL: no match.
        let wrong_url = TabEvent::complete("tab-1", "https://example.com/");
        assert!(slot.take_match(&wrong_url, Instant::now()).is_none());

        // Wrong id, right URL: no match.
        let wrong_id = TabEvent::complete("tab-9", "https://claude.ai/chat/");
        assert!(slot.take_match(&wrong_id, Instant::now()).is_none());

        // Both: match, slot consumed.
        let both = TabEvent::complete("tab-1", "https://claude.ai/chat/");
        assert!(slot.take_match(&both, Instant::now()).is_some());
        assert_eq!(slot.state(), HandoffState::Idle);
    }

    #[test]
    fn test_substring_fallback_matches_within_window() {
        let mut slot = PendingSlot::new();
        slot.set(pending(None, far_deadline()));
        let event = TabEvent::complete("any-tab", "https://CLAUDE.ai/new");
        assert!(slot.take_match(&event, Instant::now()).is_some());
    }

    #[test]
    fn test_substring_fallback_expires_past_deadline() {
        let mut slot = PendingSlot::new();
        let deadline = Instant::now() - Duration::from_millis(1);
        slot.set(pending(None, deadline));
        let event = TabEvent::complete("any-tab", "https://claude.ai/new");
        assert!(slot.take_match(&event, Instant::now()).is_none());
        // Expired record is dropped entirely.
        assert_eq!(slot.state(), HandoffState::Idle);
    }

    #[test]
    fn test_empty_url_never_matches() {
        let mut slot = PendingSlot::new();
        slot.set(pending(None, far_deadline()));
        let event = TabEvent::complete("tab-1", "");
        assert!(slot.take_match(&event, Instant::now()).is_none());
        assert_eq!(slot.state(), HandoffState::AwaitingTab);
    }
}
