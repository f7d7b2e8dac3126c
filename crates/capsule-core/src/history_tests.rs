use capsule_protocols::Intent;
use tempfile::TempDir;

use super::*;

fn entry(id: i64, summary: &str) -> HistoryEntry {
    HistoryEntry {
        id,
        summary: summary.to_string(),
        intent: Intent::GeneralKnowledge,
        platform_suggested: "ChatGPT".to_string(),
        source_url: "https://chatgpt.com/c/1".to_string(),
        date_formatted: "2026-01-01 00:00:00 UTC".to_string(),
        full_prompt: format!("prompt {summary}"),
    }
}

#[tokio::test]
async fn test_memory_store_is_most_recent_first() {
    let store = MemoryHistoryStore::new();
    store.append(entry(1, "first")).await.unwrap();
    store.append(entry(2, "second")).await.unwrap();

    let entries = store.list().await.unwrap();
    assert_eq!(entries[0].id, 2);
    assert_eq!(entries[1].id, 1);
}

#[tokio::test]
async fn test_memory_store_caps_and_evicts_oldest() {
    let store = MemoryHistoryStore::with_cap(3);
    for id in 1..=5 {
        store.append(entry(id, "s")).await.unwrap();
    }
    let entries = store.list().await.unwrap();
    assert_eq!(entries.len(), 3);
    // Oldest (1 and 2) evicted, newest kept in order.
    let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![5, 4, 3]);
}

#[tokio::test]
async fn test_never_exceeds_default_cap() {
    let store = MemoryHistoryStore::new();
    for id in 0..120 {
        store.append(entry(id, "s")).await.unwrap();
    }
    assert_eq!(store.list().await.unwrap().len(), HISTORY_CAP);
}

#[tokio::test]
async fn test_delete_removes_exactly_one_preserving_order() {
    let store = MemoryHistoryStore::new();
    for id in 1..=4 {
        store.append(entry(id, "s")).await.unwrap();
    }
    store.delete(3).await.unwrap();

    let ids: Vec<i64> = store.list().await.unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 2, 1]);
}

#[tokio::test]
async fn test_delete_unknown_id_is_noop() {
    let store = MemoryHistoryStore::new();
    store.append(entry(1, "s")).await.unwrap();
    store.delete(999).await.unwrap();
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_empties_store() {
    let store = MemoryHistoryStore::new();
    store.append(entry(1, "s")).await.unwrap();
    store.clear().await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_store_round_trips_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    let store = FileHistoryStore::new(&path);
    store.append(entry(1, "persisted")).await.unwrap();
    drop(store);

    let reopened = FileHistoryStore::new(&path);
    let entries = reopened.list().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].summary, "persisted");
}

#[tokio::test]
async fn test_file_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::new(dir.path().join("absent.json"));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_store_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/history.json");
    let store = FileHistoryStore::new(&path);
    store.append(entry(1, "s")).await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_file_store_caps_delete_and_clear() {
    let dir = TempDir::new().unwrap();
    let store = FileHistoryStore::with_cap(dir.path().join("history.json"), 2);

    for id in 1..=3 {
        store.append(entry(id, "s")).await.unwrap();
    }
    let ids: Vec<i64> = store.list().await.unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 2]);

    store.delete(3).await.unwrap();
    let ids: Vec<i64> = store.list().await.unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);

    store.clear().await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_store_rejects_corrupt_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    tokio::fs::write(&path, "not json").await.unwrap();

    let store = FileHistoryStore::new(&path);
    assert!(store.list().await.is_err());
}
