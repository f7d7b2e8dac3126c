//! The hand-off orchestration state machine.
//!
//! Owns the single [`PendingSlot`] and coordinates the asynchronous hand-off
//! steps: classify the scraped transcript, persist history, open/track the
//! destination tab, detect readiness, dispatch injection, and fall back to
//! the clipboard when injection cannot find an input. Runs single-threaded
//! and event-at-a-time; all cross-context communication is message passing.
//!
//! States: `Idle` -> `AwaitingTab` (pending set) -> injection dispatch ->
//! `Idle`. The slot is cleared unconditionally after dispatch; insertion
//! confirmation is the injector's own concern.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use capsule_protocols::{
    BrowserDriver, Classifier, HistoryEntry, HistoryStore, InjectionOutcome, Intent,
    OrchestratorMessage, PanelEvent, TabEvent,
};

use crate::pending::{HandoffState, PendingInjection, PendingSlot};
use crate::resolver;

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;

/// Default window during which the no-tab-id substring fallback may match.
pub const DEFAULT_FALLBACK_WINDOW: Duration = Duration::from_secs(15);

/// The orchestration state machine.
pub struct Orchestrator {
    classifier: Arc<dyn Classifier>,
    driver: Arc<dyn BrowserDriver>,
    history: Arc<dyn HistoryStore>,
    events: mpsc::UnboundedSender<PanelEvent>,
    pending: PendingSlot,
    fallback_window: Duration,
}

impl Orchestrator {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        driver: Arc<dyn BrowserDriver>,
        history: Arc<dyn HistoryStore>,
        events: mpsc::UnboundedSender<PanelEvent>,
    ) -> Self {
        Self {
            classifier,
            driver,
            history,
            events,
            pending: PendingSlot::new(),
            fallback_window: DEFAULT_FALLBACK_WINDOW,
        }
    }

    /// Override the substring-fallback window.
    pub fn with_fallback_window(mut self, window: Duration) -> Self {
        self.fallback_window = window;
        self
    }

    pub fn state(&self) -> HandoffState {
        self.pending.state()
    }

    /// Drive the orchestrator until the inbound channel closes.
    pub async fn run(mut self, mut inbound: mpsc::Receiver<OrchestratorMessage>) {
        let mut tab_events = self.driver.subscribe();
        loop {
            tokio::select! {
                message = inbound.recv() => {
                    match message {
                        Some(message) => self.handle_message(message).await,
                        None => break,
                    }
                }
                Some(event) = tab_events.recv() => {
                    self.handle_tab_event(event).await;
                }
            }
        }
    }

    /// Handle one inbound message.
    pub async fn handle_message(&mut self, message: OrchestratorMessage) {
        match message {
            OrchestratorMessage::SummarizeContext {
                context,
                source_url,
            } => self.summarize(&context, &source_url).await,
            OrchestratorMessage::ReHandOff {
                summary,
                target_platform,
                intent,
            } => self.re_hand_off(&summary, &target_platform, intent).await,
        }
    }

    /// Handle one tab lifecycle event, dispatching injection when it matches
    /// the awaited destination.
    pub async fn handle_tab_event(&mut self, event: TabEvent) {
        let Some(pending) = self.pending.take_match(&event, Instant::now()) else {
            return;
        };

        debug!(tab = %event.tab_id, platform = %pending.platform, "destination tab ready, injecting");

        // Slot already cleared by take_match: dispatch does not wait for
        // insertion confirmation.
        match self
            .driver
            .inject(&event.tab_id, &pending.platform, &pending.prompt)
            .await
        {
            Ok(InjectionOutcome::Sent) => {
                info!(platform = %pending.platform, "prompt injected and sent");
            }
            Ok(InjectionOutcome::InsertedOnly) => {
                info!(platform = %pending.platform, "prompt injected; manual send required");
            }
            Ok(InjectionOutcome::InputNotFound) => {
                warn!(platform = %pending.platform, "input not found, copying prompt to clipboard");
                self.clipboard_fallback(&pending.prompt).await;
            }
            Err(e) => {
                warn!(platform = %pending.platform, error = %e, "injection failed, copying prompt to clipboard");
                self.clipboard_fallback(&pending.prompt).await;
            }
        }
    }

    async fn summarize(&mut self, context: &str, source_url: &str) {
        let result = match self.classifier.classify(context).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "classification failed");
                self.emit(PanelEvent::DisplayError {
                    error: e.display_message(),
                });
                return;
            }
        };

        let platform = resolver::suggested_platform(result.intent);
        let handoff = resolver::resolve(&result.summary, Some(platform), result.intent);

        // One history entry per completed classification, regardless of how
        // the injection goes. A failed write only loses the entry.
        let entry = HistoryEntry::new(
            &result.summary,
            result.intent,
            platform,
            source_url,
            &handoff.prompt_to_copy,
        );
        if let Err(e) = self.history.append(entry).await {
            warn!(error = %e, "failed to save history entry");
        }

        // The pre-fill platform needs no injection, so nothing goes pending.
        if resolver::requires_injection(platform) {
            self.set_pending(PendingInjection {
                tab_id: None,
                platform: platform.to_ascii_lowercase(),
                prompt: handoff.prompt_to_copy.clone(),
                deadline: Instant::now() + self.fallback_window,
            });
        }

        self.emit(PanelEvent::DisplaySummary {
            summary_text: compose_summary_text(&result.summary, result.intent, platform),
            llm_options: resolver::platform_options(),
            base_summary: result.summary,
            intent: result.intent,
        });
    }

    async fn re_hand_off(&mut self, summary: &str, target_platform: &str, intent: Intent) {
        let handoff = resolver::resolve(summary, Some(target_platform), intent);

        if handoff.is_error() {
            warn!(platform = %target_platform, "unknown target platform");
            self.emit(PanelEvent::DisplayError {
                error: format!("Unknown target platform: {target_platform}"),
            });
            return;
        }

        let tab_id = match self.driver.open_tab(&handoff.url).await {
            Ok(tab_id) => tab_id,
            Err(e) => {
                warn!(error = %e, "failed to open destination tab");
                self.emit(PanelEvent::DisplayError {
                    error: format!("Could not open {}: {e}", handoff.platform),
                });
                return;
            }
        };

        if resolver::requires_injection(&handoff.platform) {
            self.set_pending(PendingInjection {
                tab_id: Some(tab_id),
                platform: handoff.platform.to_ascii_lowercase(),
                prompt: handoff.prompt_to_copy,
                deadline: Instant::now() + self.fallback_window,
            });
        } else {
            // Pre-filled URL: the tab itself completes the hand-off, and any
            // injection armed by an earlier suggestion is superseded.
            self.pending.clear();
            debug!(platform = %handoff.platform, "pre-filled hand-off, no injection scheduled");
        }
    }

    fn set_pending(&mut self, pending: PendingInjection) {
        if let Some(old) = self.pending.set(pending) {
            warn!(
                platform = %old.platform,
                "new hand-off overwrites one still in flight"
            );
        }
    }

    async fn clipboard_fallback(&self, prompt: &str) {
        if let Err(e) = self.driver.copy_to_clipboard(prompt).await {
            warn!(error = %e, "clipboard fallback failed");
        }
    }

    fn emit(&self, event: PanelEvent) {
        // A closed presentation channel just means nobody is listening.
        let _ = self.events.send(event);
    }
}

/// Display text shown by the presentation layer after a classification.
fn compose_summary_text(summary: &str, intent: Intent, platform: &str) -> String {
    format!(
        "**Intent:** {}\n**Suggested Platform:** {}\n---\n**ACTION:** Choose your desired LLM \
         below. The context will be **auto-injected**.\n---\n**Summary:**\n{}",
        intent.label(),
        platform,
        summary
    )
}
