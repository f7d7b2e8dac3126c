//! System clipboard fallback.

use arboard::Clipboard;

use capsule_protocols::error::BrowserError;

/// Write text to the system clipboard.
///
/// `arboard` is a blocking API, so the call runs on the blocking pool.
pub async fn copy_text(text: String) -> Result<(), BrowserError> {
    tokio::task::spawn_blocking(move || {
        let mut clipboard =
            Clipboard::new().map_err(|e| BrowserError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| BrowserError::Clipboard(e.to_string()))
    })
    .await
    .map_err(|e| BrowserError::Clipboard(format!("clipboard task panicked: {e}")))?
}
