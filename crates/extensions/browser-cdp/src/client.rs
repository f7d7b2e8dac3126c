//! CDP WebSocket client.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio::sync::{RwLock, mpsc, oneshot};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, trace, warn};

use capsule_protocols::error::BrowserError;

use crate::protocol::{BrowserVersion, CdpRequest, CdpResponse, PageInfo};
use crate::session::PageSession;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
pub(crate) type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

/// Session key for events that arrive without a session id (browser-level
/// Target events).
const BROWSER_SESSION: &str = "";

/// Pending request waiting for response.
pub(crate) struct PendingRequest {
    pub tx: oneshot::Sender<Result<Value, BrowserError>>,
}

/// CDP client for browser automation.
///
/// Connects to Chrome via WebSocket and provides methods for target control.
pub struct CdpClient {
    /// HTTP endpoint for page discovery.
    http_endpoint: String,
    /// HTTP client for the /json discovery endpoints.
    http: reqwest::Client,
    /// WebSocket sender.
    ws_tx: Arc<tokio::sync::Mutex<WsSink>>,
    /// Request ID counter.
    request_id: Arc<AtomicU64>,
    /// Pending requests waiting for responses.
    pending: Arc<Mutex<HashMap<u64, PendingRequest>>>,
    /// Event handlers by session ID.
    event_handlers: Arc<RwLock<HashMap<String, mpsc::UnboundedSender<CdpResponse>>>>,
    /// Background task handle.
    _recv_task: tokio::task::JoinHandle<()>,
}

impl CdpClient {
    /// Connect to Chrome at the given debugging endpoint
    /// (e.g. "http://localhost:9222").
    pub async fn connect(
        endpoint: &str,
        connect_timeout: std::time::Duration,
    ) -> Result<Self, BrowserError> {
        let http_endpoint = endpoint.trim_end_matches('/').to_string();

        // Find the browser WebSocket URL through version discovery.
        let version_url = format!("{}/json/version", http_endpoint);
        debug!("Fetching browser version from {}", version_url);

        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
        let version: BrowserVersion = http
            .get(&version_url)
            .send()
            .await
            .map_err(|e| BrowserError::ChromeNotAvailable(format!("{}: {}", endpoint, e)))?
            .json()
            .await
            .map_err(|e| BrowserError::ChromeNotAvailable(format!("{}: {}", endpoint, e)))?;

        debug!("Connected to browser: {}", version.browser);

        let (ws_stream, _) = tokio_tungstenite::connect_async(&version.web_socket_debugger_url)
            .await
            .map_err(|e| BrowserError::ConnectionFailed(format!("WebSocket: {}", e)))?;

        let (ws_sink, ws_source) = ws_stream.split();
        let ws_tx = Arc::new(tokio::sync::Mutex::new(ws_sink));
        let pending: Arc<Mutex<HashMap<u64, PendingRequest>>> =
            Arc::new(Mutex::new(HashMap::new()));
        let event_handlers: Arc<RwLock<HashMap<String, mpsc::UnboundedSender<CdpResponse>>>> =
            Arc::new(RwLock::new(HashMap::new()));

        let recv_task = {
            let pending = pending.clone();
            let event_handlers = event_handlers.clone();
            tokio::spawn(async move {
                Self::receive_loop(ws_source, pending, event_handlers).await;
            })
        };

        Ok(Self {
            http_endpoint,
            http,
            ws_tx,
            request_id: Arc::new(AtomicU64::new(1)),
            pending,
            event_handlers,
            _recv_task: recv_task,
        })
    }

    /// WebSocket receive loop: correlates responses by id and routes events
    /// by session id.
    async fn receive_loop(
        mut ws_source: WsSource,
        pending: Arc<Mutex<HashMap<u64, PendingRequest>>>,
        event_handlers: Arc<RwLock<HashMap<String, mpsc::UnboundedSender<CdpResponse>>>>,
    ) {
        while let Some(msg) = ws_source.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    trace!("CDP recv: {}", text);
                    match serde_json::from_str::<CdpResponse>(&text) {
                        Ok(resp) => {
                            if let Some(id) = resp.id {
                                let pending_req = pending.lock().remove(&id);
                                if let Some(req) = pending_req {
                                    let result = if let Some(err) = resp.error {
                                        Err(BrowserError::Protocol(format!(
                                            "{} (code {})",
                                            err.message, err.code
                                        )))
                                    } else {
                                        Ok(resp.result.unwrap_or(Value::Null))
                                    };
                                    let _ = req.tx.send(result);
                                }
                            } else if resp.method.is_some() {
                                let session_id = resp.session_id.clone().unwrap_or_default();
                                let handlers = event_handlers.read().await;
                                if let Some(tx) = handlers.get(&session_id) {
                                    let _ = tx.send(resp);
                                }
                            }
                        }
                        Err(e) => {
                            warn!("Failed to parse CDP message: {}", e);
                        }
                    }
                }
                Ok(Message::Close(_)) => {
                    debug!("WebSocket closed");
                    break;
                }
                Err(e) => {
                    error!("WebSocket error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    }

    /// Send a CDP command on the browser-level connection and wait for its
    /// response.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, BrowserError> {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);

        let request = CdpRequest {
            id,
            method: method.to_string(),
            params,
            session_id: None,
        };

        let json = serde_json::to_string(&request)
            .map_err(|e| BrowserError::Protocol(e.to_string()))?;
        trace!("CDP send: {}", json);

        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(id, PendingRequest { tx });

        {
            let mut ws = self.ws_tx.lock().await;
            ws.send(Message::Text(json.into()))
                .await
                .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
        }

        match tokio::time::timeout(std::time::Duration::from_secs(30), rx).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(BrowserError::ConnectionFailed("session closed".to_string())),
            Err(_) => {
                self.pending.lock().remove(&id);
                Err(BrowserError::Timeout(format!("Request {} timed out", method)))
            }
        }
    }

    /// Subscribe to browser-level events (those carrying no session id) and
    /// enable target discovery so tab lifecycle events start flowing.
    pub async fn subscribe_targets(
        &self,
    ) -> Result<mpsc::UnboundedReceiver<CdpResponse>, BrowserError> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        self.event_handlers
            .write()
            .await
            .insert(BROWSER_SESSION.to_string(), event_tx);

        self.call(
            "Target.setDiscoverTargets",
            Some(json!({"discover": true})),
        )
        .await?;

        Ok(event_rx)
    }

    /// List all open pages.
    pub async fn list_pages(&self) -> Result<Vec<PageInfo>, BrowserError> {
        let url = format!("{}/json/list", self.http_endpoint);
        let pages: Vec<PageInfo> = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| BrowserError::Protocol(e.to_string()))?;
        Ok(pages)
    }

    /// Create a new page/tab, optionally at a URL.
    pub async fn new_page(&self, url: Option<&str>) -> Result<PageInfo, BrowserError> {
        // Chrome requires PUT for /json/new.
        let create_url = if let Some(u) = url {
            format!("{}/json/new?{}", self.http_endpoint, u)
        } else {
            format!("{}/json/new", self.http_endpoint)
        };

        let page_info: PageInfo = self
            .http
            .put(&create_url)
            .send()
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| BrowserError::Protocol(e.to_string()))?;

        debug!("Created new page: {} - {}", page_info.id, page_info.url);
        Ok(page_info)
    }

    /// Attach to an existing page and return a session for it.
    pub async fn attach_page(&self, target_id: &str) -> Result<PageSession, BrowserError> {
        let result = self
            .call(
                "Target.attachToTarget",
                Some(json!({
                    "targetId": target_id,
                    "flatten": true
                })),
            )
            .await
            .map_err(|e| match e {
                BrowserError::Protocol(msg) if msg.contains("target") => {
                    BrowserError::TabNotFound(target_id.to_string())
                }
                other => other,
            })?;

        let session_id = result["sessionId"]
            .as_str()
            .ok_or_else(|| BrowserError::Protocol("Missing sessionId".to_string()))?
            .to_string();

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        self.event_handlers
            .write()
            .await
            .insert(session_id.clone(), event_tx);

        let session = PageSession::new(
            target_id.to_string(),
            session_id,
            self.ws_tx.clone(),
            self.pending.clone(),
            self.request_id.clone(),
            event_rx,
        );

        session.enable_domains().await?;

        Ok(session)
    }

    /// Close a page/target.
    pub async fn close_page(&self, target_id: &str) -> Result<(), BrowserError> {
        self.call("Target.closeTarget", Some(json!({"targetId": target_id})))
            .await?;
        Ok(())
    }
}

impl Drop for CdpClient {
    fn drop(&mut self) {
        self._recv_task.abort();
    }
}
