use reserva_core::{Establishment, EstablishmentStore, StoreConfig, StoreError};

fn store_in(dir: &tempfile::TempDir) -> EstablishmentStore {
    EstablishmentStore::from_config(&StoreConfig::in_dir(dir.path()))
}

#[test]
fn create_then_list_returns_record() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    store.create(1, "Test Hotel", "Test City", 10).expect("create should succeed");

    let hotels = store.list().expect("list should succeed");
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0], Establishment::new(1, "Test Hotel", "Test City", 10));
    assert!(dir.path().join("hotels.json").exists());
}

#[test]
fn create_appends_after_existing_records() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    store.create(3, "C", "Here", 1).expect("create should succeed");
    store.create(1, "A", "There", 2).expect("create should succeed");
    store.create(2, "B", "Everywhere", 3).expect("create should succeed");

    let ids: Vec<_> = store.list().expect("list should succeed").iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn create_accepts_duplicate_ids() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    store.create(1, "First", "X", 1).expect("create should succeed");
    store.create(1, "Second", "Y", 2).expect("create should succeed");

    assert_eq!(store.list().expect("list should succeed").len(), 2);
}

#[test]
fn delete_removes_every_matching_record() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    store.create(2, "Delete Hotel", "Test City", 5).expect("create should succeed");
    store.create(7, "Keep", "Test City", 5).expect("create should succeed");
    store.create(2, "Delete Again", "Test City", 5).expect("create should succeed");

    let removed = store.delete(2).expect("delete should succeed");

    assert_eq!(removed, 2);
    let hotels = store.list().expect("list should succeed");
    assert_eq!(hotels, vec![Establishment::new(7, "Keep", "Test City", 5)]);
}

#[test]
fn delete_unknown_id_leaves_collection_unchanged() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);
    store.create(1, "Grand Hotel", "New York", 20).expect("create should succeed");
    let before = store.list().expect("list should succeed");

    let removed = store.delete(2).expect("delete should succeed");

    assert_eq!(removed, 0);
    assert_eq!(store.list().expect("list should succeed"), before);
}

#[test]
fn delete_on_missing_file_is_noop() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);

    assert_eq!(store.delete(9).expect("delete should succeed"), 0);
    assert!(store.list().expect("list should succeed").is_empty());
}

#[test]
fn stores_share_no_state_between_instances() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let writer = store_in(&dir);
    let reader = store_in(&dir);

    writer.create(1, "Grand Hotel", "New York", 20).expect("create should succeed");
    assert_eq!(reader.list().expect("list should succeed").len(), 1);

    std::fs::write(writer.path(), "[]").expect("fixture file should be written");
    assert!(reader.list().expect("list should succeed").is_empty());
}

#[test]
fn create_on_corrupt_file_fails_and_keeps_file() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = store_in(&dir);
    std::fs::write(store.path(), "not json").expect("fixture file should be written");

    let err = store.create(1, "Grand Hotel", "New York", 20).expect_err("create should fail");

    assert!(matches!(err, StoreError::Corrupt { .. }));
    assert_eq!(std::fs::read_to_string(store.path()).expect("collection file should be readable"), "not json");
}

#[test]
fn create_with_unwritable_location_is_persistence_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let store = EstablishmentStore::new(dir.path().join("missing-dir").join("hotels.json"));

    let err = store.create(1, "Grand Hotel", "New York", 20).expect_err("create should fail");

    assert!(matches!(err, StoreError::Persistence { .. }));
    assert!(store.list().expect("list should succeed").is_empty());
}
