//! Destination-page prompt injector.
//!
//! Builds the page-context insertion script for a destination platform's
//! input controls. Insertion order matters: focus, clear, simulated paste,
//! input event, direct-assign verification, settle delay, then the send
//! click. Frameworks on these pages ignore bare value assignment, so the
//! paste simulation comes first and direct assignment is the last resort.

use serde_json::Value;
use tracing::{debug, warn};

use capsule_core::selectors::{InjectSelectors, inject_selectors_for_platform};
use capsule_protocols::browser::InjectionOutcome;
use capsule_protocols::error::BrowserError;

use crate::scrape::js_string;
use crate::session::PageSession;

const OUTCOME_SENT: &str = "sent";
const OUTCOME_INSERTED: &str = "inserted";
const OUTCOME_NO_INPUT: &str = "no-input";

/// Build the injection script. Resolves to one of the outcome strings.
pub fn build_inject_script(
    selectors: &InjectSelectors,
    prompt: &str,
    settle_delay_ms: u64,
) -> String {
    let input = js_string(selectors.input);
    let send = js_string(selectors.send);
    let prompt = js_string(prompt);

    format!(
        r#"(async () => {{
    const inputBar = document.querySelector({input});
    if (!inputBar) {{
        return "{OUTCOME_NO_INPUT}";
    }}
    const prompt = {prompt};

    if (inputBar.tagName !== "TEXTAREA") {{
        inputBar.focus();
    }}

    if (inputBar.tagName === "TEXTAREA") {{
        inputBar.value = "";
    }} else {{
        inputBar.textContent = "";
    }}

    const data = new DataTransfer();
    data.setData("text/plain", prompt);
    inputBar.dispatchEvent(new ClipboardEvent("paste", {{
        clipboardData: data,
        bubbles: true
    }}));

    const inputEvent = new Event("input", {{ bubbles: true }});
    inputBar.dispatchEvent(inputEvent);

    if (!inputBar.textContent && !inputBar.value) {{
        if (inputBar.tagName === "TEXTAREA") {{
            inputBar.value = prompt;
        }} else {{
            inputBar.textContent = prompt;
        }}
        inputBar.dispatchEvent(inputEvent);
    }}

    const sendButton = document.querySelector({send});
    if (!sendButton) {{
        return "{OUTCOME_INSERTED}";
    }}

    await new Promise((resolve) => setTimeout(resolve, {settle_delay_ms}));

    if (sendButton.disabled) {{
        return "{OUTCOME_INSERTED}";
    }}
    sendButton.click();
    return "{OUTCOME_SENT}";
}})()"#
    )
}

/// Map the script's resolved value onto an outcome.
pub fn parse_outcome(value: &Value) -> Result<InjectionOutcome, BrowserError> {
    match value.as_str() {
        Some(OUTCOME_SENT) => Ok(InjectionOutcome::Sent),
        Some(OUTCOME_INSERTED) => Ok(InjectionOutcome::InsertedOnly),
        Some(OUTCOME_NO_INPUT) => Ok(InjectionOutcome::InputNotFound),
        other => Err(BrowserError::JavaScript(format!(
            "unexpected injection result: {other:?}"
        ))),
    }
}

/// Inject the prompt into the session's page.
///
/// A destination platform with no injection selectors (or none at all)
/// reports `InputNotFound` so the caller takes the clipboard path.
pub async fn inject_session(
    session: &PageSession,
    platform: &str,
    prompt: &str,
    settle_delay_ms: u64,
) -> Result<InjectionOutcome, BrowserError> {
    let Some(selectors) = inject_selectors_for_platform(platform) else {
        warn!("No injection selectors for platform {}", platform);
        return Ok(InjectionOutcome::InputNotFound);
    };

    let script = build_inject_script(&selectors, prompt, settle_delay_ms);
    let value = session.evaluate(&script).await?;
    let outcome = parse_outcome(&value)?;
    debug!("Injection into {}: {:?}", platform, outcome);
    Ok(outcome)
}

#[cfg(test)]
#[path = "injector_tests.rs"]
mod tests;
