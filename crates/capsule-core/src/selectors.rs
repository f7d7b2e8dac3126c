//! Per-site DOM selector tables.
//!
//! Pure data: each supported source site maps to the query selectors needed to
//! locate conversation turns, and each injectable destination platform maps to
//! its input/send controls. New sites are added here and nowhere else.

#[cfg(test)]
#[path = "selectors_tests.rs"]
mod tests;

/// Selectors for scraping a source conversation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeSelectors {
    /// Matches every message container element.
    pub containers: &'static str,
    /// Matches the user text element within a container.
    pub user_text: &'static str,
    /// Matches the assistant text element within a container.
    pub assistant_text: &'static str,
}

/// Selectors for injecting into a destination platform's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectSelectors {
    pub input: &'static str,
    pub send: &'static str,
}

/// Outcome of a source-site lookup. "No site matched" is a distinct state
/// from "site matched but selectors found zero turns"; the latter is decided
/// later by the scraper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteMatch {
    Supported(ScrapeSelectors),
    Unsupported,
}

const SCRAPE_SITES: &[(&str, ScrapeSelectors)] = &[
    (
        "gemini.google.com",
        ScrapeSelectors {
            containers: ".conversation-container, message-bubble-group, .chat-pane",
            user_text: "user-query-content, .query-text-content, .user-query-content",
            assistant_text: ".markdown, .model-response-text, .markdown-body",
        },
    ),
    (
        "chatgpt.com",
        ScrapeSelectors {
            containers: "[data-testid^=\"conversation-turn\"]",
            user_text: ".text-base",
            assistant_text: ".markdown",
        },
    ),
    (
        "claude.ai",
        ScrapeSelectors {
            containers: "[data-testid^=\"message\"]",
            user_text: "[data-testid=\"user-message\"]",
            assistant_text: ".font-claude-response",
        },
    ),
];

const INJECT_PLATFORMS: &[(&str, InjectSelectors)] = &[
    (
        "chatgpt",
        InjectSelectors {
            input: "textarea[data-testid=\"text-input\"], #prompt-textarea",
            send: "button[data-testid=\"send-button\"], button[aria-label=\"Send message\"]",
        },
    ),
    (
        "gemini",
        InjectSelectors {
            input: "div[contenteditable=\"true\"]",
            send: "button[aria-label=\"Send message\"]",
        },
    ),
    (
        "claude",
        InjectSelectors {
            input: "textarea[placeholder*=\"message\"], textarea[data-test-id*=\"text-input\"]",
            send: "button[aria-label=\"Send message\"], button[data-test-id*=\"send-button\"]",
        },
    ),
];

/// Look up scrape selectors by page host.
pub fn scrape_selectors_for_host(host: &str) -> SiteMatch {
    SCRAPE_SITES
        .iter()
        .find(|(fragment, _)| host.contains(fragment))
        .map(|(_, selectors)| SiteMatch::Supported(*selectors))
        .unwrap_or(SiteMatch::Unsupported)
}

/// Look up injection selectors by destination platform name
/// (case-insensitive). Platforms that pre-fill via URL have no entry.
pub fn inject_selectors_for_platform(platform: &str) -> Option<InjectSelectors> {
    let platform = platform.to_ascii_lowercase();
    INJECT_PLATFORMS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, selectors)| *selectors)
}
