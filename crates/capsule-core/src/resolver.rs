//! Hand-off resolver.
//!
//! Pure functions mapping `(summary, target platform, intent)` to a
//! [`HandOff`] record: no I/O, no mutation, same inputs always yield the same
//! output. Unknown platform names resolve to the error sentinel rather than
//! failing silently; callers must branch on it.

use std::collections::BTreeMap;

use capsule_protocols::{HandOff, Intent};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Default destination when the intent gives no better suggestion.
pub const GENERAL_DEFAULT_PLATFORM: &str = "ChatGPT";

/// Fixed platform table: display name to base destination URL.
const PLATFORM_URLS: &[(&str, &str)] = &[
    ("ChatGPT", "https://chatgpt.com/"),
    ("Perplexity", "https://www.perplexity.ai/search"),
    ("Claude", "https://claude.ai/chat/"),
    ("Gemini", "https://gemini.google.com/"),
];

/// Platform whose interface accepts a pre-filled query string instead of
/// scripted injection.
const PREFILL_PLATFORM: &str = "Perplexity";

/// Suggested destination platform for an intent.
pub fn suggested_platform(intent: Intent) -> &'static str {
    match intent {
        Intent::CodingAndDebugging => "ChatGPT",
        Intent::ResearchAndAnalysis => "Perplexity",
        Intent::CreativeWriting => "Claude",
        Intent::PlanningAndStrategy => "Gemini",
        Intent::GeneralKnowledge | Intent::Unknown => GENERAL_DEFAULT_PLATFORM,
    }
}

/// Base URL for a platform display name, if known.
pub fn platform_base_url(platform: &str) -> Option<&'static str> {
    PLATFORM_URLS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, url)| *url)
}

/// The full platform table, for presenting every option to the user.
pub fn platform_options() -> BTreeMap<String, String> {
    PLATFORM_URLS
        .iter()
        .map(|(name, url)| (name.to_string(), url.to_string()))
        .collect()
}

/// Whether a hand-off to this platform needs scripted injection. False only
/// for the pre-fill-via-URL special case.
pub fn requires_injection(platform: &str) -> bool {
    !platform.eq_ignore_ascii_case(PREFILL_PLATFORM)
}

/// Compose the full hand-off prompt carried to the destination platform.
pub fn compose_prompt(summary: &str, intent: Intent) -> String {
    format!(
        "Context Capsule Hand-off (Intent: {}): Continue this conversation based on the \
         context summary provided: {}",
        intent.label(),
        summary
    )
}

/// Resolve a hand-off target.
///
/// `target_platform` overrides the intent-derived suggestion when present.
/// For the pre-fill platform the composed prompt is URL-encoded into the
/// destination URL and no injection is expected downstream.
pub fn resolve(summary: &str, target_platform: Option<&str>, intent: Intent) -> HandOff {
    let platform = target_platform.unwrap_or(GENERAL_DEFAULT_PLATFORM);

    let Some(base_url) = platform_base_url(platform) else {
        return HandOff::error_sentinel();
    };

    let prompt = compose_prompt(summary, intent);

    let url = if platform == PREFILL_PLATFORM {
        // Base URLs in the table are statically valid.
        let mut url = url::Url::parse(base_url).expect("platform table URL");
        url.query_pairs_mut().append_pair("q", &prompt);
        url.to_string()
    } else {
        base_url.to_string()
    };

    HandOff {
        platform: platform.to_string(),
        url,
        prompt_to_copy: prompt,
    }
}
