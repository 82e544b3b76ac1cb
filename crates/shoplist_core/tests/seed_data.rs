use shoplist_core::{load_seed, load_seed_or_empty, start_session, SeedError, SessionConfig};
use std::fs;

#[test]
fn load_seed_reads_lists_in_document_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{
            "shoppingLists": [
                {"id": 1, "name": "A", "archived": false, "items": [], "members": []},
                {"id": 2, "name": "B", "archived": true,
                 "items": [{"id": 1, "name": "x", "resolved": true}],
                 "members": ["m"]}
            ]
        }"#,
    )
    .expect("write seed file");

    let lists = load_seed(&path).expect("seed should load");
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].name, "A");
    assert!(lists[1].archived);
    assert!(lists[1].items[0].resolved);
    assert_eq!(lists[1].members, vec!["m".to_string()]);
}

#[test]
fn missing_file_degrades_to_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");

    assert!(matches!(load_seed(&path), Err(SeedError::Io { .. })));
    assert!(load_seed_or_empty(&path).is_empty());
}

#[test]
fn malformed_file_degrades_to_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"shoppingLists": [{"id": "one"}]}"#).expect("write seed file");

    assert!(matches!(load_seed(&path), Err(SeedError::Parse(_))));
    assert!(load_seed_or_empty(&path).is_empty());
}

#[test]
fn session_uses_configured_seed_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("one.json");
    fs::write(&path, r#"{"shoppingLists": [{"id": 1, "name": "Solo"}]}"#)
        .expect("write seed file");

    let config = SessionConfig {
        seed_path: Some(path),
        ..SessionConfig::default()
    };
    let nav = start_session(&config);
    assert_eq!(nav.collection().len(), 1);
    assert_eq!(nav.collection().lists()[0].name, "Solo");
}

#[test]
fn session_with_broken_seed_starts_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "not json at all").expect("write seed file");

    let config = SessionConfig {
        seed_path: Some(path),
        ..SessionConfig::default()
    };
    assert!(start_session(&config).collection().is_empty());
}
