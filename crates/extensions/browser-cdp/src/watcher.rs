//! Tab lifecycle watcher.
//!
//! Consumes browser-level `Target.*` events and turns them into the
//! [`TabEvent`] stream the orchestrator matches pending injections against.
//! Target discovery only says a page target exists or changed; load
//! completion is established by attaching and polling readiness, after which
//! a `Complete` event carries the tab's final URL.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use capsule_protocols::browser::{TabEvent, TabStatus};

use crate::client::CdpClient;
use crate::protocol::{CdpResponse, TargetInfo};

pub(crate) type Subscribers = Arc<Mutex<Vec<mpsc::UnboundedSender<TabEvent>>>>;

/// Extract the page target a lifecycle event refers to, if any.
pub(crate) fn page_target_from_event(event: &CdpResponse) -> Option<TargetInfo> {
    match event.method.as_deref() {
        Some("Target.targetCreated") | Some("Target.targetInfoChanged") => {}
        _ => return None,
    }

    let info: TargetInfo =
        serde_json::from_value(event.params.as_ref()?.get("targetInfo")?.clone()).ok()?;

    if info.target_type == "page" {
        Some(info)
    } else {
        None
    }
}

/// Send an event to every live subscriber, dropping the closed ones.
pub(crate) fn broadcast(subscribers: &Subscribers, event: &TabEvent) {
    subscribers
        .lock()
        .retain(|tx| tx.send(event.clone()).is_ok());
}

/// Watcher loop. For each page target seen, probes load completion once and
/// broadcasts a `Complete` event with the tab's settled URL.
pub(crate) async fn run(
    client: Arc<CdpClient>,
    mut events: mpsc::UnboundedReceiver<CdpResponse>,
    subscribers: Subscribers,
) {
    // Guards against probing the same target concurrently; InfoChanged fires
    // for title updates too.
    let in_flight: Arc<Mutex<HashSet<String>>> = Arc::new(Mutex::new(HashSet::new()));

    while let Some(event) = events.recv().await {
        let created = event.method.as_deref() == Some("Target.targetCreated");
        let Some(info) = page_target_from_event(&event) else {
            continue;
        };

        if created {
            broadcast(
                &subscribers,
                &TabEvent {
                    tab_id: info.target_id.clone(),
                    url: info.url.clone(),
                    status: TabStatus::Loading,
                },
            );
        }

        if !in_flight.lock().insert(info.target_id.clone()) {
            continue;
        }

        let client = client.clone();
        let subscribers = subscribers.clone();
        let in_flight = in_flight.clone();
        tokio::spawn(async move {
            let target_id = info.target_id;
            match probe_complete(&client, &target_id).await {
                Ok(url) => {
                    debug!("Tab {} complete at {}", target_id, url);
                    broadcast(&subscribers, &TabEvent::complete(target_id.clone(), url));
                }
                Err(e) => {
                    warn!("Load probe for tab {} failed: {}", target_id, e);
                }
            }
            in_flight.lock().remove(&target_id);
        });
    }
}

async fn probe_complete(
    client: &CdpClient,
    target_id: &str,
) -> Result<String, capsule_protocols::error::BrowserError> {
    let session = client.attach_page(target_id).await?;
    session.wait_for_load().await?;
    session.get_url().await
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
