//! `BrowserDriver` implementation over CDP.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, info};

use capsule_protocols::browser::{BrowserDriver, InjectionOutcome, TabEvent, TabId};
use capsule_protocols::error::BrowserError;

use crate::client::CdpClient;
use crate::clipboard;
use crate::injector::inject_session;
use crate::protocol::PageInfo;
use crate::scrape::scrape_session;
use crate::watcher::{self, Subscribers};

/// Browser driver backed by a Chrome instance with remote debugging enabled.
pub struct CdpBrowserDriver {
    client: Arc<CdpClient>,
    subscribers: Subscribers,
    settle_delay_ms: u64,
    watch_task: tokio::task::JoinHandle<()>,
}

impl CdpBrowserDriver {
    /// Connect to Chrome and start the tab lifecycle watcher.
    pub async fn connect(
        endpoint: &str,
        connect_timeout: std::time::Duration,
        settle_delay_ms: u64,
    ) -> Result<Self, BrowserError> {
        let client = Arc::new(CdpClient::connect(endpoint, connect_timeout).await?);
        let events = client.subscribe_targets().await?;

        let subscribers: Subscribers = Arc::new(Mutex::new(Vec::new()));
        let watch_task = tokio::spawn(watcher::run(
            client.clone(),
            events,
            subscribers.clone(),
        ));

        info!("Browser driver connected to {}", endpoint);

        Ok(Self {
            client,
            subscribers,
            settle_delay_ms,
            watch_task,
        })
    }

    /// Find the source conversation page: the first open page whose URL
    /// contains the given fragment, or the frontmost page when no fragment
    /// is given.
    pub async fn source_page(&self, url_fragment: Option<&str>) -> Result<PageInfo, BrowserError> {
        let pages = self.client.list_pages().await?;

        let found = match url_fragment {
            Some(fragment) => pages
                .into_iter()
                .find(|p| p.page_type == "page" && p.url.contains(fragment)),
            None => pages.into_iter().find(|p| p.page_type == "page"),
        };

        found.ok_or_else(|| {
            BrowserError::TabNotFound(url_fragment.unwrap_or("<frontmost page>").to_string())
        })
    }

    /// Scrape a page into the classifier transcript.
    pub async fn scrape(&self, tab_id: &TabId) -> Result<String, BrowserError> {
        let session = self.client.attach_page(tab_id).await?;
        scrape_session(&session).await
    }
}

#[async_trait]
impl BrowserDriver for CdpBrowserDriver {
    async fn open_tab(&self, url: &str) -> Result<TabId, BrowserError> {
        let page = self.client.new_page(Some(url)).await?;
        debug!("Opened tab {} at {}", page.id, url);
        Ok(page.id)
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<TabEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().push(tx);
        rx
    }

    async fn inject(
        &self,
        tab_id: &TabId,
        platform: &str,
        prompt: &str,
    ) -> Result<InjectionOutcome, BrowserError> {
        let session = self.client.attach_page(tab_id).await?;
        inject_session(&session, platform, prompt, self.settle_delay_ms).await
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), BrowserError> {
        clipboard::copy_text(text.to_string()).await
    }
}

impl Drop for CdpBrowserDriver {
    fn drop(&mut self) {
        self.watch_task.abort();
    }
}
