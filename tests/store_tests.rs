mod common;
use common::{sample_entry, setup_test_db};
use rdesktime::db::{EntryStore, KvStore, STORAGE_KEY};
use rdesktime::errors::AppError;
use rdesktime::models::Entry;

#[test]
fn test_save_then_load_by_date() {
    let mut store = EntryStore::in_memory();
    let entry = sample_entry("2025-09-01");

    store.save(&entry).unwrap();

    assert_eq!(store.load_by_date("2025-09-01"), Some(entry));
    assert_eq!(store.load_by_date("2025-09-02"), None);
}

#[test]
fn test_save_is_an_upsert_by_date() {
    let mut store = EntryStore::in_memory();
    store.save(&sample_entry("2025-09-01")).unwrap();
    store.save(&sample_entry("2025-09-02")).unwrap();

    let mut changed = sample_entry("2025-09-01");
    changed.office_out = "18:00".into();
    store.save(&changed).unwrap();
    store.save(&changed).unwrap();

    let all = store.load_all();
    assert_eq!(all.len(), 2);
    // replaced in place, not moved to the end
    assert_eq!(all[0].date, "2025-09-01");
    assert_eq!(all[0].office_out, "18:00");
}

#[test]
fn test_persisted_format_is_camel_case_json() {
    let mut store = EntryStore::in_memory();
    store.save(&sample_entry("2025-09-01")).unwrap();

    let raw = store.kv().get(STORAGE_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"officeIn\":\"09:00\""));
    assert!(raw.contains("\"startTime\":\"10:00\""));
}

#[test]
fn test_reads_entries_with_missing_optional_fields() {
    let mut store = EntryStore::in_memory();
    store
        .kv_mut()
        .set(
            STORAGE_KEY,
            r#"[{"id":"1","date":"2025-01-02","officeIn":"08:30"}]"#,
        )
        .unwrap();

    let e = store.load_by_date("2025-01-02").unwrap();
    assert_eq!(e.office_in, "08:30");
    assert!(e.office_out.is_empty());
    assert!(e.breaks.is_empty());
}

#[test]
fn test_corrupt_blob_reads_as_empty() {
    let mut store = EntryStore::in_memory();
    store.kv_mut().set(STORAGE_KEY, "{ not json").unwrap();

    assert!(store.load_all().is_empty());
    assert!(matches!(
        store.try_load_all(),
        Err(AppError::CorruptStore(_))
    ));
}

#[test]
fn test_empty_store() {
    let store = EntryStore::in_memory();
    assert!(store.load_all().is_empty());
    assert!(store.try_load_all().unwrap().is_empty());
}

#[test]
fn test_delete_and_clear() {
    let mut store = EntryStore::in_memory();
    store.save(&sample_entry("2025-09-01")).unwrap();
    store.save(&sample_entry("2025-09-02")).unwrap();

    assert!(store.delete("2025-09-01").unwrap());
    assert!(!store.delete("2025-09-01").unwrap());
    assert_eq!(store.load_all().len(), 1);

    store.clear().unwrap();
    assert!(store.load_all().is_empty());
    assert!(!store.kv().contains(STORAGE_KEY));
}

#[test]
fn test_delete_missing_date_leaves_store_untouched() {
    let mut store = EntryStore::in_memory();

    assert!(!store.delete("2025-09-01").unwrap());
    assert!(!store.kv().contains(STORAGE_KEY));

    store.save(&sample_entry("2025-09-02")).unwrap();
    let before = store.kv().get(STORAGE_KEY).unwrap();
    assert!(!store.delete("2025-09-01").unwrap());
    assert_eq!(store.kv().get(STORAGE_KEY).unwrap(), before);
}

#[test]
fn test_sqlite_store_survives_reopen() {
    let db_path = setup_test_db("store_reopen");

    {
        let mut store = EntryStore::open_sqlite(&db_path).unwrap();
        store.save(&sample_entry("2025-09-01")).unwrap();
        store.save(&Entry::new("2025-09-02")).unwrap();
    }

    let store = EntryStore::open_sqlite(&db_path).unwrap();
    let all = store.load_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], sample_entry_with_id(&all[0]));
}

/// `sample_entry` with the id taken from an already stored entry.
fn sample_entry_with_id(stored: &Entry) -> Entry {
    let mut e = sample_entry(&stored.date);
    e.id = stored.id.clone();
    for (b, s) in e.breaks.iter_mut().zip(&stored.breaks) {
        b.id = s.id.clone();
    }
    e
}

#[test]
fn test_writes_refuse_to_overwrite_corrupt_blob() {
    let mut store = EntryStore::in_memory();
    store.kv_mut().set(STORAGE_KEY, "garbage").unwrap();

    assert!(matches!(
        store.save(&sample_entry("2025-09-01")),
        Err(AppError::CorruptStore(_))
    ));
    assert_eq!(
        store.kv().get(STORAGE_KEY).unwrap().as_deref(),
        Some("garbage")
    );

    store.clear().unwrap();
    store.save(&sample_entry("2025-09-01")).unwrap();
    assert_eq!(store.load_all().len(), 1);
}
