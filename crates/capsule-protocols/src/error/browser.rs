//! Browser driver errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Chrome not available at {0}. Start Chrome with: chrome --remote-debugging-port=9222")]
    ChromeNotAvailable(String),

    #[error("Tab not found: {0}")]
    TabNotFound(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("JavaScript error: {0}")]
    JavaScript(String),

    #[error("Unknown destination platform: {0}")]
    UnknownPlatform(String),

    #[error("Clipboard access failed: {0}")]
    Clipboard(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Protocol error: {0}")]
    Protocol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_not_available_hint() {
        let err = BrowserError::ChromeNotAvailable("http://localhost:9222".to_string());
        assert!(err.to_string().contains("--remote-debugging-port"));
    }

    #[test]
    fn test_variants_display() {
        let errors = vec![
            BrowserError::ConnectionFailed("ws".to_string()),
            BrowserError::TabNotFound("tab-1".to_string()),
            BrowserError::NavigationFailed("net::ERR".to_string()),
            BrowserError::JavaScript("ReferenceError".to_string()),
            BrowserError::UnknownPlatform("AskJeeves".to_string()),
            BrowserError::Clipboard("denied".to_string()),
            BrowserError::Timeout("load".to_string()),
            BrowserError::Protocol("bad frame".to_string()),
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
