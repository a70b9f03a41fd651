use chrono::NaiveDate;
use daybook_core::{EntryPatch, EntryStore, MemoryKv, StoreError};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}

fn open_store() -> EntryStore<MemoryKv> {
    EntryStore::open(MemoryKv::new())
}

#[test]
fn ensure_entry_is_idempotent_per_date() {
    let mut store = open_store();
    let day = date(2025, 3, 10);

    let first = store.ensure_entry(day);
    let second = store.ensure_entry(day);

    assert_eq!(first.id, second.id);
    assert_eq!(store.entries_on(day).len(), 1);
    assert_eq!(store.document().entries.len(), 1);
}

#[test]
fn ensure_entry_starts_blank_with_equal_timestamps() {
    let mut store = open_store();
    let entry = store.ensure_entry(date(2025, 3, 10));

    assert!(entry.title.is_empty());
    assert!(entry.body.is_empty());
    assert!(entry.wake.is_empty());
    assert_eq!(entry.created_at, entry.updated_at);
}

#[test]
fn new_entry_allows_multiple_per_day_ordered_by_creation() {
    let mut store = open_store();
    let day = date(2025, 3, 10);

    let first = store.new_entry(day);
    let second = store.new_entry(day);
    assert_ne!(first.id, second.id);

    let listed = store.entries_on(day);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);

    // ensure_entry now reuses the earliest entry instead of creating.
    assert_eq!(store.ensure_entry(day).id, first.id);
}

#[test]
fn update_merges_supplied_fields_and_preserves_the_rest() {
    let mut store = open_store();
    let created = store.ensure_entry(date(2025, 3, 10));

    let updated = store
        .update_entry(
            created.id,
            &EntryPatch {
                title: Some("Trip".to_string()),
                lunch: Some("ramen".to_string()),
                ..EntryPatch::default()
            },
        )
        .expect("update should succeed");

    assert_eq!(updated.title, "Trip");
    assert_eq!(updated.lunch, "ramen");
    assert_eq!(updated.date, created.date);
    assert!(updated.body.is_empty(), "unsupplied fields keep prior values");
    assert!(updated.updated_at >= updated.created_at);

    let fetched = store.entry(created.id).expect("entry should exist");
    assert_eq!(*fetched, updated);
}

#[test]
fn update_can_move_an_entry_to_another_date() {
    let mut store = open_store();
    let entry = store.ensure_entry(date(2025, 3, 10));

    store
        .update_entry(
            entry.id,
            &EntryPatch {
                date: Some(date(2025, 3, 11)),
                ..EntryPatch::default()
            },
        )
        .expect("update should succeed");

    assert!(store.entries_on(date(2025, 3, 10)).is_empty());
    assert_eq!(store.entries_on(date(2025, 3, 11)).len(), 1);
}

#[test]
fn update_unknown_id_returns_not_found() {
    let mut store = open_store();
    let missing = Uuid::new_v4();

    let err = store
        .update_entry(missing, &EntryPatch::default())
        .expect_err("unknown id must fail");
    assert!(matches!(err, StoreError::EntryNotFound(id) if id == missing));
}

#[test]
fn delete_removes_only_the_target_record() {
    let mut store = open_store();
    let keep = store.new_entry(date(2025, 3, 10));
    let gone = store.new_entry(date(2025, 3, 11));

    store.delete_entry(gone.id).expect("delete should succeed");
    assert!(store.entry(gone.id).is_none());
    assert!(store.entry(keep.id).is_some());

    let err = store
        .delete_entry(gone.id)
        .expect_err("second delete must report not found");
    assert!(matches!(err, StoreError::EntryNotFound(id) if id == gone.id));
    assert!(store.entry(keep.id).is_some(), "other records are untouched");
}
