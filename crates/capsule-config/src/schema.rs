//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chrome: ChromeConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub handoff: HandoffConfig,
}

/// Chrome remote-debugging connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChromeConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:9222".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

/// Remote summarize-and-classify service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; typically supplied as `${GEMINI_API_KEY}`.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_url: default_api_url(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Persisted hand-off log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Path to the history JSON file. `~` is expanded.
    #[serde(default = "default_history_path")]
    pub path: String,

    /// Maximum number of retained entries; older ones are evicted.
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            capacity: default_history_capacity(),
        }
    }
}

fn default_history_path() -> String {
    "~/.capsule/history.json".to_string()
}

fn default_history_capacity() -> usize {
    50
}

impl HistoryConfig {
    /// Expanded filesystem path.
    pub fn expanded_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.path).to_string())
    }
}

/// Hand-off timing knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffConfig {
    /// Delay between inserting text and clicking send, letting the
    /// destination UI enable its send control.
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,

    /// How long the no-tab-id URL-substring match stays armed.
    #[serde(default = "default_fallback_window")]
    pub fallback_window_secs: u64,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay(),
            fallback_window_secs: default_fallback_window(),
        }
    }
}

fn default_settle_delay() -> u64 {
    300
}

fn default_fallback_window() -> u64 {
    15
}
