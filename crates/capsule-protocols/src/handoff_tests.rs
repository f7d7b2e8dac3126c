use super::*;

#[test]
fn test_error_sentinel_shape() {
    let sentinel = HandOff::error_sentinel();
    assert!(sentinel.is_error());
    assert_eq!(sentinel.platform, "Error");
    assert!(sentinel.url.is_empty());
    assert_eq!(sentinel.prompt_to_copy, "Error: Unknown platform");
}

#[test]
fn test_regular_handoff_is_not_error() {
    let handoff = HandOff {
        platform: "ChatGPT".to_string(),
        url: "https://chatgpt.com/".to_string(),
        prompt_to_copy: "prompt".to_string(),
    };
    assert!(!handoff.is_error());
}

#[test]
fn test_history_entry_stamps_id_and_date() {
    let before = chrono::Utc::now().timestamp_millis();
    let entry = HistoryEntry::new(
        "summary",
        Intent::CreativeWriting,
        "Claude",
        "https://claude.ai/chat/abc",
        "full prompt",
    );
    let after = chrono::Utc::now().timestamp_millis();

    assert!(entry.id >= before && entry.id <= after);
    assert!(!entry.date_formatted.is_empty());
    assert_eq!(entry.intent, Intent::CreativeWriting);
    assert_eq!(entry.platform_suggested, "Claude");
}

#[test]
fn test_history_entry_serde_round_trip() {
    let entry = HistoryEntry::new(
        "S",
        Intent::CodingAndDebugging,
        "ChatGPT",
        "https://gemini.google.com/app",
        "Intent: CODING AND DEBUGGING",
    );
    let json = serde_json::to_string(&entry).unwrap();
    assert!(json.contains("\"CODING_AND_DEBUGGING\""));
    let back: HistoryEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
}
