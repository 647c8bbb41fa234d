//! Behavioral tests for the submission store
//!
//! Covers the persistence contract: create-if-missing, insert-if-absent
//! (first write wins), stable snapshots, corrupt-document handling, and
//! lost-update safety under concurrent inserts.

use std::sync::Arc;

use foms_common::{Error, RegistrationRecord, SubmissionStore};
use tempfile::TempDir;

fn record(phone: &str) -> RegistrationRecord {
    RegistrationRecord {
        name: "Ann".to_string(),
        email: "a@x.com".to_string(),
        phone: phone.to_string(),
        group: "G1".to_string(),
        school: "S1".to_string(),
        location: "L1".to_string(),
    }
}

async fn open_store(dir: &TempDir) -> SubmissionStore {
    SubmissionStore::open(dir.path().join("submissions.json"))
        .await
        .expect("store should open")
}

#[tokio::test]
async fn open_creates_empty_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("submissions.json");

    let store = SubmissionStore::open(&path).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw.trim(), "{}");
    assert!(store.snapshot().await.unwrap().is_empty());
}

#[tokio::test]
async fn open_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("submissions.json");

    SubmissionStore::open(&path).await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn reopen_does_not_truncate_existing_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("submissions.json");

    let store = SubmissionStore::open(&path).await.unwrap();
    store.insert(record("555")).await.unwrap();
    drop(store);

    let store = SubmissionStore::open(&path).await.unwrap();
    let records = store.snapshot().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].phone, "555");
}

#[tokio::test]
async fn insert_then_snapshot_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    store.insert(record("555")).await.unwrap();

    let records = store.snapshot().await.unwrap();
    assert_eq!(records, vec![record("555")]);
}

#[tokio::test]
async fn distinct_phones_all_stored() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    for phone in ["555-0001", "555-0002", "555-0003"] {
        store.insert(record(phone)).await.unwrap();
    }

    let records = store.snapshot().await.unwrap();
    assert_eq!(records.len(), 3);
    let phones: Vec<&str> = records.iter().map(|r| r.phone.as_str()).collect();
    assert!(phones.contains(&"555-0001"));
    assert!(phones.contains(&"555-0002"));
    assert!(phones.contains(&"555-0003"));
}

#[tokio::test]
async fn duplicate_phone_keeps_first_record() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    store.insert(record("555")).await.unwrap();

    let mut second = record("555");
    second.name = "Bob".to_string();
    let err = store.insert(second).await.unwrap_err();
    assert!(matches!(err, Error::DuplicateKey(ref phone) if phone == "555"));

    // First write wins, field for field
    let records = store.snapshot().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Ann");
}

#[tokio::test]
async fn insert_rejects_incomplete_record() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let err = store.insert(record("  ")).await.unwrap_err();
    assert!(matches!(err, Error::MissingFields));

    let mut blank_school = record("555");
    blank_school.school = String::new();
    let err = store.insert(blank_school).await.unwrap_err();
    assert!(matches!(err, Error::MissingFields));

    assert!(store.snapshot().await.unwrap().is_empty());
}

#[tokio::test]
async fn load_recreates_deleted_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("submissions.json");
    let store = SubmissionStore::open(&path).await.unwrap();

    std::fs::remove_file(&path).unwrap();

    assert!(store.load().await.unwrap().is_empty());
    assert!(path.exists());
}

#[tokio::test]
async fn corrupt_document_surfaces_without_reset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("submissions.json");
    std::fs::write(&path, "not json at all").unwrap();

    // Opening an existing file leaves its content alone
    let store = SubmissionStore::open(&path).await.unwrap();

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, Error::CorruptStore(_)));

    let err = store.insert(record("555")).await.unwrap_err();
    assert!(matches!(err, Error::CorruptStore(_)));

    // The document is never auto-repaired
    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "not json at all");
}

#[tokio::test]
async fn snapshot_order_is_stable() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    // Insert out of key order
    for phone in ["555-0009", "555-0001", "555-0005"] {
        store.insert(record(phone)).await.unwrap();
    }

    let first = store.snapshot().await.unwrap();
    let second = store.snapshot().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_inserts_lose_no_registration() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(open_store(&dir).await);

    const WRITERS: usize = 16;
    let mut handles = Vec::with_capacity(WRITERS);
    for i in 0..WRITERS {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.insert(record(&format!("555-{:04}", i))).await
        }));
    }

    for handle in handles {
        handle.await.unwrap().expect("every distinct phone should insert");
    }

    let records = store.snapshot().await.unwrap();
    assert_eq!(records.len(), WRITERS);
}

#[tokio::test]
async fn persisted_document_is_keyed_by_phone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("submissions.json");
    let store = SubmissionStore::open(&path).await.unwrap();

    store.insert(record("555")).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["555"]["name"], "Ann");
    assert_eq!(doc["555"]["phone"], "555");
}
