use networth_core::db::migrations::latest_version;
use networth_core::db::{open_db, DbError};
use networth_core::{
    default_document_for, CategoryType, DocumentStorage, HeadlessSlotRepository,
    MemorySlotRepository, NetWorthData, NetWorthStore, SlotRepository, SqliteSlotRepository,
    CORRUPT_BACKUP_KEY, STORAGE_KEY,
};
use serde_json::json;

fn household_with_null_amount() -> serde_json::Value {
    json!({
        "categories": [
            { "id": "cash", "name": "Cash", "type": "asset", "order": 1, "color": "bg-teal-500" }
        ],
        "items": [
            {
                "id": "wallet",
                "categoryId": "cash",
                "name": "Wallet",
                "order": 1.5,
                "monthlyValues": { "2025-01": 250.0, "2025-02": null }
            }
        ],
        "currentMonth": "2025-01",
        "displayMonths": ["2025-01", "2025-02"]
    })
}

#[test]
fn sqlite_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("networth.sqlite3");

    let category_id = {
        let repo = SqliteSlotRepository::open(&db_path).unwrap();
        let mut store = NetWorthStore::open(DocumentStorage::new(repo));
        let category_id = store.add_category("Pension", CategoryType::Asset);
        let item_id = store.add_item(&category_id, "Plan A").unwrap();
        store.update_item_value(&item_id, "2025-02", 1234.0).unwrap();
        store.navigate_to_month("2025-02").unwrap();
        category_id
    };

    let repo = SqliteSlotRepository::open(&db_path).unwrap();
    let store = NetWorthStore::open(DocumentStorage::new(repo));
    assert!(store.data().has_category(&category_id));
    assert_eq!(store.current_month(), "2025-02");
    assert_eq!(store.items().len(), 17);
    let items = store.items_by_category();
    assert_eq!(items[category_id.as_str()][0].value_for("2025-02"), 1234.0);
}

#[test]
fn persisted_blob_is_the_bare_document() {
    let repo = MemorySlotRepository::new();
    let mut store = NetWorthStore::open(DocumentStorage::new(repo.clone()));
    store.delete_item("heloc");

    let blob = repo.get(STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert!(value["categories"].is_array());
    assert!(value["items"].is_array());
    assert!(value["currentMonth"].is_string());
    assert_eq!(value["displayMonths"].as_array().unwrap().len(), 6);

    let stored: NetWorthData = serde_json::from_value(value).unwrap();
    assert_eq!(&stored, store.data());
}

#[test]
fn opening_persists_the_initial_document() {
    let repo = MemorySlotRepository::new();
    assert!(repo.get(STORAGE_KEY).is_none());

    let _store = NetWorthStore::open(DocumentStorage::new(repo.clone()));
    assert!(repo.get(STORAGE_KEY).is_some());
}

#[test]
fn failed_import_does_not_touch_storage() {
    let repo = MemorySlotRepository::new();
    let mut store = NetWorthStore::open(DocumentStorage::new(repo.clone()));
    let before = repo.get(STORAGE_KEY);

    assert!(store.import_data("{").is_err());
    assert_eq!(repo.get(STORAGE_KEY), before);
}

#[test]
fn headless_store_works_in_memory_only() {
    let mut store = NetWorthStore::open(DocumentStorage::new(HeadlessSlotRepository));
    let id = store.add_category("Cash", CategoryType::Asset);
    assert!(store.data().has_category(&id));
    assert!(!HeadlessSlotRepository.is_available());
}

#[test]
fn opened_database_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("slots.sqlite3")).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let repo = SqliteSlotRepository::new(conn);
    repo.write_slot("k", "v1").unwrap();
    repo.write_slot("k", "v2").unwrap();
    assert_eq!(repo.read_slot("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(repo.read_slot("other").unwrap(), None);
}

#[test]
fn missing_parent_directory_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing").join("slots.sqlite3");

    let err = open_db(&missing).unwrap_err();
    assert!(matches!(err, DbError::Open { ref path, .. } if *path == missing));
}

#[test]
fn stored_null_amount_survives_open() {
    let repo = MemorySlotRepository::new();
    repo.write_slot(STORAGE_KEY, &household_with_null_amount().to_string())
        .unwrap();

    let store = NetWorthStore::open(DocumentStorage::new(repo.clone()));
    assert_eq!(store.categories().len(), 1);
    let wallet = store.data().item("wallet").unwrap();
    assert_eq!(wallet.order, 2);
    assert_eq!(wallet.value_for("2025-01"), 250.0);
    assert_eq!(wallet.value_for("2025-02"), 0.0);

    let blob = repo.get(STORAGE_KEY).unwrap();
    assert!(blob.contains("\"wallet\""));
    assert!(repo.get(CORRUPT_BACKUP_KEY).is_none());
}

#[test]
fn imported_household_with_null_amount_is_accepted() {
    let mut store = NetWorthStore::open(DocumentStorage::new(MemorySlotRepository::new()));
    store
        .import_data(&household_with_null_amount().to_string())
        .unwrap();
    assert_eq!(store.items().len(), 1);
}

#[test]
fn unreadable_slot_is_backed_up_before_seed_is_saved() {
    let repo = MemorySlotRepository::new();
    let damaged = r#"{"categories": "lost", "items": []}"#;
    repo.write_slot(STORAGE_KEY, damaged).unwrap();

    let store = NetWorthStore::open(DocumentStorage::new(repo.clone()));
    assert_eq!(store.items().len(), 16);
    assert_eq!(repo.get(CORRUPT_BACKUP_KEY).as_deref(), Some(damaged));
    assert_ne!(repo.get(STORAGE_KEY).as_deref(), Some(damaged));
}

#[test]
fn in_memory_sqlite_repository_round_trips_the_document() {
    let storage = DocumentStorage::new(SqliteSlotRepository::open_in_memory().unwrap());
    let data = default_document_for("2025-03");

    storage.try_save(&data).unwrap();
    assert_eq!(storage.load(), data);
}
