use chrono::NaiveDate;
use daybook_core::{
    search_document, DiaryEntry, EntryPatch, EntryStore, MemoryKv, SchedulePatch, SearchOutcome,
    StoreDocument, SEARCH_RESULT_CAP,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date should be valid")
}

fn results(outcome: SearchOutcome) -> daybook_core::SearchResults {
    match outcome {
        SearchOutcome::Results(results) => results,
        SearchOutcome::NoQuery => panic!("expected results, got NoQuery"),
    }
}

#[test]
fn blank_keyword_is_no_query_not_zero_matches() {
    let mut store = EntryStore::open(MemoryKv::new());
    store.ensure_entry(date(2025, 3, 10));

    assert_eq!(store.search(""), SearchOutcome::NoQuery);
    assert_eq!(store.search("   "), SearchOutcome::NoQuery);
}

#[test]
fn unmatched_keyword_returns_empty_results() {
    let mut store = EntryStore::open(MemoryKv::new());
    store.ensure_entry(date(2025, 3, 10));

    let found = results(store.search("zzzznotfound"));
    assert!(found.is_empty());
}

#[test]
fn match_is_case_insensitive() {
    let mut store = EntryStore::open(MemoryKv::new());
    let entry = store.ensure_entry(date(2025, 3, 10));
    store
        .update_entry(
            entry.id,
            &EntryPatch {
                title: Some("Trip".to_string()),
                ..EntryPatch::default()
            },
        )
        .expect("update should succeed");

    let found = results(store.search("trip"));
    assert_eq!(found.entries.len(), 1);
    assert_eq!(found.entries[0].id, entry.id);

    let found_upper = results(store.search("TRIP"));
    assert_eq!(found_upper.entries.len(), 1);
}

#[test]
fn all_entry_text_fields_are_searchable() {
    let mut store = EntryStore::open(MemoryKv::new());
    let entry = store.ensure_entry(date(2025, 3, 10));
    store
        .update_entry(
            entry.id,
            &EntryPatch {
                wake: Some("06:40 groggy".to_string()),
                dinner: Some("gyoza with friends".to_string()),
                ..EntryPatch::default()
            },
        )
        .expect("update should succeed");

    assert_eq!(results(store.search("groggy")).entries.len(), 1);
    assert_eq!(results(store.search("gyoza")).entries.len(), 1);
}

#[test]
fn schedule_title_note_and_party_are_searchable() {
    let mut store = EntryStore::open(MemoryKv::new());
    let item = store.new_schedule(date(2025, 3, 10));
    store
        .update_schedule(
            item.id,
            &SchedulePatch {
                note: Some("bring slides".to_string()),
                party: Some("Tanaka".to_string()),
                ..SchedulePatch::default()
            },
        )
        .expect("update should succeed");

    assert_eq!(results(store.search("slides")).schedules.len(), 1);
    assert_eq!(results(store.search("tanaka")).schedules.len(), 1);
    assert!(results(store.search("slides")).entries.is_empty());
}

#[test]
fn results_are_ordered_most_recently_updated_first() {
    let mut document = StoreDocument::default();
    for (index, stamp) in [(0_i64, 100_i64), (1, 300), (2, 200)] {
        let mut entry = DiaryEntry::blank(date(2025, 3, 10), index);
        entry.title = format!("walk {index}");
        entry.updated_at = stamp;
        document.entries.push(entry);
    }

    let found = results(search_document(&document, "walk"));
    let stamps: Vec<i64> = found.entries.iter().map(|entry| entry.updated_at).collect();
    assert_eq!(stamps, vec![300, 200, 100]);
}

#[test]
fn equal_timestamps_keep_insertion_order() {
    let mut document = StoreDocument::default();
    for index in 0..3 {
        let mut entry = DiaryEntry::blank(date(2025, 3, 10), 50);
        entry.title = format!("walk {index}");
        document.entries.push(entry);
    }

    let found = results(search_document(&document, "walk"));
    let titles: Vec<&str> = found
        .entries
        .iter()
        .map(|entry| entry.title.as_str())
        .collect();
    assert_eq!(titles, vec!["walk 0", "walk 1", "walk 2"]);
}

#[test]
fn result_set_is_capped_per_collection() {
    let mut document = StoreDocument::default();
    for index in 0..(SEARCH_RESULT_CAP + 15) {
        let mut entry = DiaryEntry::blank(date(2025, 3, 10), index as i64);
        entry.body = "every day the same walk".to_string();
        document.entries.push(entry);
    }

    let found = results(search_document(&document, "walk"));
    assert_eq!(found.entries.len(), SEARCH_RESULT_CAP);
}
