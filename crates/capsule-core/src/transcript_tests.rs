use super::*;

#[test]
fn test_turns_are_role_tagged_and_delimited() {
    let turns = vec![
        ConversationTurn::new(Role::User, "How do I sort a Vec?"),
        ConversationTurn::new(Role::Assistant, "Use sort() or sort_by()."),
    ];
    let blob = assemble_transcript(&turns, "");
    assert_eq!(
        blob,
        "USER: How do I sort a Vec?\n---\nASSISTANT: Use sort() or sort_by()."
    );
}

#[test]
fn test_unknown_role_tag() {
    let turns = vec![ConversationTurn::new(Role::Unknown, "orphan text")];
    let blob = assemble_transcript(&turns, "");
    assert!(blob.starts_with("UNKNOWN: orphan text"));
}

#[test]
fn test_empty_turns_are_skipped() {
    let turns = vec![
        ConversationTurn::new(Role::User, "   "),
        ConversationTurn::new(Role::Assistant, "real content"),
    ];
    let blob = assemble_transcript(&turns, "");
    assert_eq!(blob, "ASSISTANT: real content");
}

#[test]
fn test_zero_turns_falls_back_to_raw_dump() {
    let blob = assemble_transcript(&[], "page body text here");
    assert!(blob.contains("RAW PAGE TEXT DUMP"));
    assert!(blob.contains("Infer the conversation roles"));
    assert!(blob.contains("page body text here"));
    assert!(!blob.is_empty());
}

#[test]
fn test_all_empty_turns_also_fall_back() {
    let turns = vec![ConversationTurn::new(Role::User, "")];
    let blob = assemble_transcript(&turns, "body");
    assert!(blob.starts_with(FALLBACK_HEADER));
}

#[test]
fn test_text_is_trimmed() {
    let turns = vec![ConversationTurn::new(Role::User, "  padded  ")];
    let blob = assemble_transcript(&turns, "");
    assert_eq!(blob, "USER: padded");
}
