//! Integration tests for the JSON project store

use std::path::PathBuf;

use portico::domain::Project;
use portico::store::{ProjectStore, StoreError};
use tempfile::TempDir;

fn test_store() -> (TempDir, ProjectStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = ProjectStore::at(dir.path().join("projects.json"));
    (dir, store)
}

fn sample(alias: &str) -> Project {
    Project::new(alias, vec![PathBuf::from("/tmp/sample")])
}

#[test]
fn test_empty_store_loads_empty_list() {
    let (_dir, store) = test_store();
    assert!(store.load().is_empty());
}

#[test]
fn test_add_and_reload() {
    let (_dir, store) = test_store();
    store.add(sample("api")).unwrap();
    store.add(sample("web")).unwrap();

    let projects = store.load();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].alias, "api");
}

#[test]
fn test_duplicate_alias_is_rejected_case_insensitively() {
    let (_dir, store) = test_store();
    store.add(sample("api")).unwrap();

    let err = store.add(sample("API")).unwrap_err();
    match err.downcast_ref::<StoreError>() {
        Some(StoreError::DuplicateAlias(alias)) => assert_eq!(alias, "API"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_find_by_id_and_alias() {
    let (_dir, store) = test_store();
    let added = store.add(sample("api")).unwrap();

    assert_eq!(store.find(&added.id).unwrap().alias, "api");
    assert_eq!(store.find("API").unwrap().id, added.id);
    assert!(store.find("nope").is_none());
}

#[test]
fn test_update_bumps_updated_at() {
    let (_dir, store) = test_store();
    let added = store.add(sample("api")).unwrap();

    let updated = store
        .update(&added.id, |p| p.alias = "api-v2".to_string())
        .unwrap();

    assert_eq!(updated.alias, "api-v2");
    assert!(updated.updated_at >= added.updated_at);
}

#[test]
fn test_update_unknown_id_fails() {
    let (_dir, store) = test_store();
    let err = store.update("missing", |_| {}).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::NotFound(_))
    ));
}

#[test]
fn test_remove() {
    let (_dir, store) = test_store();
    let added = store.add(sample("api")).unwrap();

    let removed = store.remove(&added.id).unwrap();
    assert_eq!(removed.alias, "api");
    assert!(store.load().is_empty());
}

#[test]
fn test_toggle_favorite() {
    let (_dir, store) = test_store();
    let added = store.add(sample("api")).unwrap();

    assert!(store.toggle_favorite(&added.id).unwrap());
    assert!(!store.toggle_favorite(&added.id).unwrap());
}

#[test]
fn test_touch_last_opened() {
    let (_dir, store) = test_store();
    let added = store.add(sample("api")).unwrap();
    assert!(added.last_opened_at.is_none());

    store.touch_last_opened(&added.id).unwrap();
    assert!(store.find(&added.id).unwrap().last_opened_at.is_some());
}

#[test]
fn test_groups_are_distinct_and_sorted() {
    let (_dir, store) = test_store();
    for (alias, group) in [("a", Some("Work")), ("b", Some("Home")), ("c", Some("Work")), ("d", None)] {
        let mut project = sample(alias);
        project.group = group.map(String::from);
        store.add(project).unwrap();
    }

    assert_eq!(store.groups(), vec!["Home".to_string(), "Work".to_string()]);
}

#[test]
fn test_alias_exists_respects_exclusion() {
    let (_dir, store) = test_store();
    let added = store.add(sample("api")).unwrap();

    assert!(store.alias_exists("API", None));
    // Excluding the project itself, e.g. while editing it
    assert!(!store.alias_exists("api", Some(&added.id)));
    assert!(!store.alias_exists("other", None));
}

#[test]
fn test_clear() {
    let (_dir, store) = test_store();
    store.add(sample("api")).unwrap();
    store.clear().unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn test_corrupt_file_loads_as_empty_list() {
    let (dir, store) = test_store();
    std::fs::write(dir.path().join("projects.json"), "{not json").unwrap();

    assert!(store.load().is_empty());

    // And the store stays writable afterwards
    store.add(sample("api")).unwrap();
    assert_eq!(store.load().len(), 1);
}
