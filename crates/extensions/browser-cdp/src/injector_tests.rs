use super::*;

fn selectors() -> InjectSelectors {
    InjectSelectors {
        input: "textarea[data-testid=\"text-input\"], #prompt-textarea",
        send: "button[data-testid=\"send-button\"]",
    }
}

#[test]
fn test_script_embeds_prompt_as_literal() {
    let script = build_inject_script(&selectors(), "line one\nline \"two\"", 300);
    assert!(script.contains(r#""line one\nline \"two\"""#));
}

#[test]
fn test_script_uses_both_selectors() {
    let script = build_inject_script(&selectors(), "p", 300);
    assert!(script.contains("text-input"));
    assert!(script.contains("send-button"));
}

#[test]
fn test_script_order_of_operations() {
    let script = build_inject_script(&selectors(), "p", 300);

    let focus = script.find(".focus()").unwrap();
    let paste = script.find("ClipboardEvent(\"paste\"").unwrap();
    let input_event = script.find("new Event(\"input\"").unwrap();
    let settle = script.find("setTimeout(resolve, 300)").unwrap();
    let click = script.find("sendButton.click()").unwrap();

    assert!(focus < paste);
    assert!(paste < input_event);
    assert!(input_event < settle);
    assert!(settle < click);
}

#[test]
fn test_script_settle_delay_configurable() {
    let script = build_inject_script(&selectors(), "p", 1500);
    assert!(script.contains("setTimeout(resolve, 1500)"));
}

#[test]
fn test_script_checks_disabled_before_click() {
    let script = build_inject_script(&selectors(), "p", 300);
    let disabled = script.find("sendButton.disabled").unwrap();
    let click = script.find("sendButton.click()").unwrap();
    assert!(disabled < click);
}

#[test]
fn test_parse_outcome_variants() {
    assert_eq!(
        parse_outcome(&serde_json::json!("sent")).unwrap(),
        InjectionOutcome::Sent
    );
    assert_eq!(
        parse_outcome(&serde_json::json!("inserted")).unwrap(),
        InjectionOutcome::InsertedOnly
    );
    assert_eq!(
        parse_outcome(&serde_json::json!("no-input")).unwrap(),
        InjectionOutcome::InputNotFound
    );
}

#[test]
fn test_parse_outcome_rejects_unknown() {
    let result = parse_outcome(&serde_json::json!(null));
    assert!(matches!(result, Err(BrowserError::JavaScript(_))));
}
