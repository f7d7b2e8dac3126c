//! Source-page conversation scraper.
//!
//! Builds a page-context extraction script from a site's selector table,
//! evaluates it over CDP, and flattens the result into the transcript blob
//! the classifier consumes. Script construction and result parsing are pure
//! so they test without a browser.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use capsule_core::selectors::{ScrapeSelectors, SiteMatch, scrape_selectors_for_host};
use capsule_core::transcript::{ConversationTurn, assemble_transcript};
use capsule_protocols::error::BrowserError;

use crate::session::PageSession;

/// Raw extraction result returned by the page-context script.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedPage {
    pub turns: Vec<ConversationTurn>,
    pub page_text: String,
}

impl ScrapedPage {
    /// Flatten into the classifier transcript. Zero turns engages the raw
    /// page text fallback.
    pub fn into_transcript(self) -> String {
        assemble_transcript(&self.turns, &self.page_text)
    }
}

/// Build the extraction script for a selector set. The script enumerates the
/// message containers, probes user-then-assistant text within each, and
/// captures the page's full visible text for the fallback path.
pub fn build_scrape_script(selectors: &ScrapeSelectors) -> String {
    let containers = js_string(selectors.containers);
    let user = js_string(selectors.user_text);
    let assistant = js_string(selectors.assistant_text);

    format!(
        r#"(() => {{
    const turns = [];
    document.querySelectorAll({containers}).forEach((container) => {{
        let role = "";
        let text = "";
        const userEl = container.querySelector({user});
        if (userEl) {{
            role = "USER";
            text = userEl.innerText.trim();
        }}
        const assistantEl = container.querySelector({assistant});
        if (assistantEl && !role) {{
            role = "ASSISTANT";
            text = assistantEl.innerText.trim();
        }}
        if (text.length > 0) {{
            turns.push({{ role: role || "UNKNOWN", text: text }});
        }}
    }});
    return {{ turns: turns, pageText: document.body.innerText }};
}})()"#
    )
}

/// Parse the value `Runtime.evaluate` returned for the extraction script.
pub fn parse_scraped(value: Value) -> Result<ScrapedPage, BrowserError> {
    serde_json::from_value(value)
        .map_err(|e| BrowserError::JavaScript(format!("unexpected scrape result: {e}")))
}

/// Scrape the session's page into a transcript blob.
///
/// An unrecognized host skips container enumeration and goes straight to the
/// raw text fallback.
pub async fn scrape_session(session: &PageSession) -> Result<String, BrowserError> {
    let host = session.get_host().await?;

    match scrape_selectors_for_host(&host) {
        SiteMatch::Supported(selectors) => {
            debug!("Scraping {} with site selectors", host);
            let value = session.evaluate(&build_scrape_script(&selectors)).await?;
            let scraped = parse_scraped(value)?;
            debug!("Scraped {} turns", scraped.turns.len());
            Ok(scraped.into_transcript())
        }
        SiteMatch::Unsupported => {
            warn!("No scraper configuration for {}, using raw page text", host);
            let value = session.evaluate("document.body.innerText").await?;
            let page_text = value.as_str().unwrap_or("").to_string();
            Ok(assemble_transcript(&[], &page_text))
        }
    }
}

/// Embed a Rust string as a JS string literal.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
#[path = "scrape_tests.rs"]
mod tests;
