use chrono::NaiveDate;
use daybook_core::{
    DiaryEntry, EntryPatch, EntryStore, MemoryKv, ScheduleItem, StoreDocument, StoreError,
};
use serde_json::json;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}

#[test]
fn export_then_import_reproduces_the_records() {
    let mut source = EntryStore::open(MemoryKv::new());
    let entry = source.ensure_entry(date(2025, 3, 10));
    source
        .update_entry(
            entry.id,
            &EntryPatch {
                title: Some("Trip".to_string()),
                ..EntryPatch::default()
            },
        )
        .expect("update should succeed");
    source.new_schedule(date(2025, 3, 11));
    let exported = source.export_json().expect("export should succeed");

    let mut target = EntryStore::open(MemoryKv::new());
    let summary = target.import_json(&exported).expect("import should succeed");

    assert_eq!(summary.entries_added, 1);
    assert_eq!(summary.schedules_added, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(
        target.entry(entry.id).expect("entry imported").title,
        "Trip"
    );
}

#[test]
fn imported_records_overwrite_same_id_local_ones() {
    let mut store = EntryStore::open(MemoryKv::new());
    let entry = store.ensure_entry(date(2025, 3, 10));

    let mut remote_copy = store.entry(entry.id).expect("entry exists").clone();
    remote_copy.title = "rewritten elsewhere".to_string();
    let file = serde_json::to_string(&StoreDocument {
        entries: vec![remote_copy],
        ..StoreDocument::default()
    })
    .expect("test document serializes");

    let summary = store.import_json(&file).expect("import should succeed");
    assert_eq!(summary.entries_replaced, 1);
    assert_eq!(summary.entries_added, 0);
    assert_eq!(
        store.entry(entry.id).expect("entry exists").title,
        "rewritten elsewhere"
    );
}

#[test]
fn records_missing_required_fields_are_skipped_not_fatal() {
    let good = DiaryEntry::blank(date(2025, 3, 10), 100);
    let file = json!({
        "entries": [good.clone(), json!({"title": "no id or date"})],
        "schedules": [json!({"note": "also incomplete"})],
    })
    .to_string();

    let mut store = EntryStore::open(MemoryKv::new());
    let summary = store.import_json(&file).expect("import should succeed");

    assert_eq!(summary.entries_added, 1);
    assert_eq!(summary.schedules_added, 0);
    assert_eq!(summary.skipped, 2);
    assert!(store.entry(good.id).is_some());
}

#[test]
fn import_rejects_input_that_is_not_a_document() {
    let mut store = EntryStore::open(MemoryKv::new());

    let err = store
        .import_json("complete garbage")
        .expect_err("non-JSON input must fail");
    assert!(matches!(err, StoreError::MalformedDocument(_)));

    let err = store
        .import_json("[1, 2, 3]")
        .expect_err("non-object input must fail");
    assert!(matches!(err, StoreError::MalformedDocument(_)));

    assert!(store.document().entries.is_empty(), "store is unchanged");
}

#[test]
fn last_write_wins_merge_prefers_the_newer_record() {
    let mut store = EntryStore::open(MemoryKv::new());
    let local = store.ensure_entry(date(2025, 3, 10));

    let mut newer = store.entry(local.id).expect("entry exists").clone();
    newer.title = "from the cloud".to_string();
    newer.updated_at = local.updated_at + 10_000;

    let mut older = DiaryEntry::blank(date(2025, 3, 11), 0);
    older.id = local.id;
    older.updated_at = local.updated_at - 10_000;

    // Newer copy wins.
    let summary = store.merge_last_write_wins(StoreDocument {
        entries: vec![newer.clone()],
        ..StoreDocument::default()
    });
    assert_eq!((summary.applied, summary.ignored), (1, 0));
    assert_eq!(
        store.entry(local.id).expect("entry exists").title,
        "from the cloud"
    );

    // Older copy is ignored.
    let summary = store.merge_last_write_wins(StoreDocument {
        entries: vec![older],
        ..StoreDocument::default()
    });
    assert_eq!((summary.applied, summary.ignored), (0, 1));
    assert_eq!(
        store.entry(local.id).expect("entry exists").title,
        "from the cloud"
    );
}

#[test]
fn last_write_wins_merge_inserts_unknown_records() {
    let mut store = EntryStore::open(MemoryKv::new());

    let remote_entry = DiaryEntry::blank(date(2025, 3, 12), 500);
    let remote_item = ScheduleItem::blank(date(2025, 3, 13), 500);
    let summary = store.merge_last_write_wins(StoreDocument {
        entries: vec![remote_entry.clone()],
        schedules: vec![remote_item.clone()],
        ..StoreDocument::default()
    });

    assert_eq!(summary.applied, 2);
    assert!(store.entry(remote_entry.id).is_some());
    assert!(store.schedule(remote_item.id).is_some());
}
