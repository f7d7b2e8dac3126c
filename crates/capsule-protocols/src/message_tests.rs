use serde_json::json;

use super::*;

#[test]
fn test_summarize_context_wire_format() {
    let msg = OrchestratorMessage::SummarizeContext {
        context: "USER: hi".to_string(),
        source_url: "https://chatgpt.com/c/1".to_string(),
    };
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["action"], "summarizeContext");
    assert_eq!(value["context"], "USER: hi");
    assert_eq!(value["sourceUrl"], "https://chatgpt.com/c/1");
}

#[test]
fn test_re_hand_off_wire_format() {
    let msg = OrchestratorMessage::ReHandOff {
        summary: "S".to_string(),
        target_platform: "Claude".to_string(),
        intent: Intent::CreativeWriting,
    };
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["action"], "reHandOff");
    assert_eq!(value["targetPlatform"], "Claude");
    assert_eq!(value["intent"], "CREATIVE_WRITING");
}

#[test]
fn test_from_value_validates_schema() {
    let ok = OrchestratorMessage::from_value(json!({
        "action": "summarizeContext",
        "context": "text",
        "sourceUrl": "https://claude.ai/chat/1",
    }));
    assert!(ok.is_ok());

    let unknown_action = OrchestratorMessage::from_value(json!({
        "action": "explode",
    }));
    assert!(unknown_action.is_err());

    let missing_field = OrchestratorMessage::from_value(json!({
        "action": "reHandOff",
        "summary": "S",
    }));
    assert!(missing_field.is_err());
}

#[test]
fn test_display_summary_wire_format() {
    let mut options = BTreeMap::new();
    options.insert("ChatGPT".to_string(), "https://chatgpt.com/".to_string());
    let event = PanelEvent::DisplaySummary {
        summary_text: "**Intent:** CODING AND DEBUGGING".to_string(),
        llm_options: options,
        base_summary: "S".to_string(),
        intent: Intent::CodingAndDebugging,
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["action"], "displaySummary");
    assert_eq!(value["llmOptions"]["ChatGPT"], "https://chatgpt.com/");
    assert_eq!(value["baseSummary"], "S");
}

#[test]
fn test_display_error_round_trip() {
    let event = PanelEvent::DisplayError {
        error: "API/Parsing Error: boom".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: PanelEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_inject_prompt_round_trip() {
    let msg = InjectPrompt {
        prompt: "Context Capsule Hand-off".to_string(),
    };
    let json = serde_json::to_string(&msg).unwrap();
    let back: InjectPrompt = serde_json::from_str(&json).unwrap();
    assert_eq!(back, msg);
}
