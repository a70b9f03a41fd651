//! Diary/schedule document store.
//!
//! # Responsibility
//! - Own all records and expose the CRUD, search and planning surface.
//! - Persist the full document through the key-value port on every
//!   mutation, before the mutating call returns.
//!
//! # Invariants
//! - There is no suspension point between mutation and persistence.
//! - Validation failures leave the document untouched.
//! - Listeners observe a mutation only after it has been persisted.

use crate::model::entry::{DiaryEntry, EntryId, EntryPatch};
use crate::model::schedule::{ScheduleId, ScheduleItem, SchedulePatch};
use crate::model::working_hours::WorkingHours;
use crate::planner::{weekly_free_slots, FreeSlot};
use crate::search::{search_document, SearchOutcome};
use crate::store::document::{decode_document, decode_import, encode_document, StoreDocument};
use crate::store::kv::KeyValuePort;
use crate::store::{StoreError, StoreResult, STORAGE_KEY};
use chrono::{NaiveDate, Utc};
use log::{info, warn};

/// Which collection a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Entries,
    Schedules,
    Settings,
}

/// Counts reported by [`EntryStore::import_json`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub entries_added: usize,
    pub entries_replaced: usize,
    pub schedules_added: usize,
    pub schedules_replaced: usize,
    /// Records dropped because they failed to deserialize or validate.
    pub skipped: usize,
}

/// Counts reported by [`EntryStore::merge_last_write_wins`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Incoming records inserted or taken over the local copy.
    pub applied: usize,
    /// Incoming records older than the local copy.
    pub ignored: usize,
}

/// Single-owner store for all diary entries and schedule items.
///
/// All access runs on one logical thread between discrete UI events;
/// operations are synchronous and complete before the next one starts.
pub struct EntryStore<K: KeyValuePort> {
    kv: K,
    doc: StoreDocument,
    degraded: bool,
    listeners: Vec<Box<dyn Fn(ChangeKind)>>,
}

impl<K: KeyValuePort> EntryStore<K> {
    /// Loads the persisted document through `kv`.
    ///
    /// Missing or corrupt data initializes an empty store instead of
    /// failing; the decode path logs the fallback.
    pub fn open(kv: K) -> Self {
        let raw = kv.get(STORAGE_KEY);
        let doc = decode_document(raw.as_deref());
        info!(
            "event=store_open module=store status=ok entries={} schedules={}",
            doc.entries.len(),
            doc.schedules.len()
        );
        Self {
            kv,
            doc,
            degraded: false,
            listeners: Vec::new(),
        }
    }

    /// Releases the port, e.g. to reopen the store over the same backend.
    pub fn into_port(self) -> K {
        self.kv
    }

    /// Whether the last persistence attempt failed.
    ///
    /// Operations still complete in memory while degraded; a later
    /// successful write clears the flag.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Read-only view of the full document, e.g. for rendering.
    pub fn document(&self) -> &StoreDocument {
        &self.doc
    }

    /// Registers a callback fired after every persisted mutation.
    pub fn subscribe(&mut self, listener: impl Fn(ChangeKind) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ---- diary entries ----

    /// Entries for `date`, created-at ascending, ties by insertion order.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&DiaryEntry> {
        let mut entries: Vec<&DiaryEntry> = self
            .doc
            .entries
            .iter()
            .filter(|entry| entry.date == date)
            .collect();
        entries.sort_by_key(|entry| entry.created_at);
        entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&DiaryEntry> {
        self.doc.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns the first entry for `date`, creating a blank one when the
    /// day has none yet.
    ///
    /// Idempotent for a day that already has entries: no duplicate is
    /// created and nothing is written.
    pub fn ensure_entry(&mut self, date: NaiveDate) -> DiaryEntry {
        if let Some(existing) = self.entries_on(date).first() {
            return (*existing).clone();
        }
        let entry = DiaryEntry::blank(date, now_ms());
        self.doc.entries.push(entry.clone());
        self.persist();
        self.notify(ChangeKind::Entries);
        entry
    }

    /// Explicit "new" action: always creates a blank entry for `date`.
    pub fn new_entry(&mut self, date: NaiveDate) -> DiaryEntry {
        let entry = DiaryEntry::blank(date, now_ms());
        self.doc.entries.push(entry.clone());
        self.persist();
        self.notify(ChangeKind::Entries);
        entry
    }

    /// Merges `patch` over the entry with `id` and stamps `updated_at`.
    ///
    /// Fields the patch leaves out keep their prior values. On a
    /// validation failure the stored record is unchanged, so the caller
    /// can correct the form and retry.
    pub fn update_entry(&mut self, id: EntryId, patch: &EntryPatch) -> StoreResult<DiaryEntry> {
        let index = self
            .doc
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::EntryNotFound(id))?;

        let mut updated = self.doc.entries[index].clone();
        patch.apply(&mut updated);
        updated.updated_at = now_ms();
        updated.validate()?;

        self.doc.entries[index] = updated.clone();
        self.persist();
        self.notify(ChangeKind::Entries);
        Ok(updated)
    }

    /// Removes the entry with `id`; other records are never touched.
    pub fn delete_entry(&mut self, id: EntryId) -> StoreResult<()> {
        let index = self
            .doc
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::EntryNotFound(id))?;

        self.doc.entries.remove(index);
        self.persist();
        self.notify(ChangeKind::Entries);
        Ok(())
    }

    // ---- schedule items ----

    /// Items for `date`, start-time ascending with timeless items first.
    pub fn schedules_on(&self, date: NaiveDate) -> Vec<&ScheduleItem> {
        let mut items: Vec<&ScheduleItem> = self
            .doc
            .schedules
            .iter()
            .filter(|item| item.date == date)
            .collect();
        items.sort_by_key(|item| item.start);
        items
    }

    pub fn schedule(&self, id: ScheduleId) -> Option<&ScheduleItem> {
        self.doc.schedules.iter().find(|item| item.id == id)
    }

    /// Explicit "new" action: always creates a blank item for `date`.
    pub fn new_schedule(&mut self, date: NaiveDate) -> ScheduleItem {
        let item = ScheduleItem::blank(date, now_ms());
        self.doc.schedules.push(item.clone());
        self.persist();
        self.notify(ChangeKind::Schedules);
        item
    }

    /// Merges `patch` over the item with `id` and stamps `updated_at`.
    ///
    /// Rejects a patched record whose end does not come after its start;
    /// the stored record is unchanged in that case.
    pub fn update_schedule(
        &mut self,
        id: ScheduleId,
        patch: &SchedulePatch,
    ) -> StoreResult<ScheduleItem> {
        let index = self
            .doc
            .schedules
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::ScheduleNotFound(id))?;

        let mut updated = self.doc.schedules[index].clone();
        patch.apply(&mut updated);
        updated.updated_at = now_ms();
        updated.validate()?;

        self.doc.schedules[index] = updated.clone();
        self.persist();
        self.notify(ChangeKind::Schedules);
        Ok(updated)
    }

    /// Removes the item with `id`; other records are never touched.
    pub fn delete_schedule(&mut self, id: ScheduleId) -> StoreResult<()> {
        let index = self
            .doc
            .schedules
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::ScheduleNotFound(id))?;

        self.doc.schedules.remove(index);
        self.persist();
        self.notify(ChangeKind::Schedules);
        Ok(())
    }

    // ---- settings ----

    pub fn working_hours(&self) -> WorkingHours {
        self.doc.work
    }

    pub fn set_working_hours(&mut self, hours: WorkingHours) -> StoreResult<()> {
        hours.validate()?;
        self.doc.work = hours;
        self.persist();
        self.notify(ChangeKind::Settings);
        Ok(())
    }

    // ---- queries ----

    /// Case-folded substring search over both collections.
    pub fn search(&self, keyword: &str) -> SearchOutcome {
        search_document(&self.doc, keyword)
    }

    /// Free gaps of at least `duration_minutes` within working hours,
    /// over the 7 days starting at `week_start`.
    pub fn free_slots(
        &self,
        duration_minutes: u16,
        week_start: NaiveDate,
    ) -> StoreResult<Vec<FreeSlot>> {
        weekly_free_slots(&self.doc.schedules, week_start, self.doc.work, duration_minutes)
            .map_err(StoreError::from)
    }

    // ---- exchange ----

    /// Serializes the full document for an export file.
    pub fn export_json(&self) -> StoreResult<String> {
        encode_document(&self.doc)
            .ok_or_else(|| StoreError::Encode("document serialization failed".to_string()))
    }

    /// Merges an export file into the store, imported records overwriting
    /// same-id local ones. Undecodable records are skipped and counted.
    pub fn import_json(&mut self, raw: &str) -> StoreResult<ImportSummary> {
        let imported = decode_import(raw)?;
        let mut summary = ImportSummary {
            skipped: imported.skipped,
            ..ImportSummary::default()
        };

        for entry in imported.entries {
            match self.doc.entries.iter().position(|e| e.id == entry.id) {
                Some(index) => {
                    self.doc.entries[index] = entry;
                    summary.entries_replaced += 1;
                }
                None => {
                    self.doc.entries.push(entry);
                    summary.entries_added += 1;
                }
            }
        }
        for item in imported.schedules {
            match self.doc.schedules.iter().position(|s| s.id == item.id) {
                Some(index) => {
                    self.doc.schedules[index] = item;
                    summary.schedules_replaced += 1;
                }
                None => {
                    self.doc.schedules.push(item);
                    summary.schedules_added += 1;
                }
            }
        }
        let work_changed = imported.work.is_some();
        if let Some(work) = imported.work {
            self.doc.work = work;
        }

        self.persist();
        self.notify(ChangeKind::Entries);
        self.notify(ChangeKind::Schedules);
        if work_changed {
            self.notify(ChangeKind::Settings);
        }
        info!(
            "event=import module=store status=ok entries={} schedules={} skipped={}",
            summary.entries_added + summary.entries_replaced,
            summary.schedules_added + summary.schedules_replaced,
            summary.skipped
        );
        Ok(summary)
    }

    /// Applies a remote copy of the document, newest write winning per
    /// record. Records only ever gain or keep their latest state; nothing
    /// is deleted. The working-hours setting is left local: it carries no
    /// write timestamp to compare.
    pub fn merge_last_write_wins(&mut self, incoming: StoreDocument) -> MergeSummary {
        let mut summary = MergeSummary::default();

        for entry in incoming.entries {
            match self.doc.entries.iter().position(|e| e.id == entry.id) {
                Some(index) if entry.updated_at > self.doc.entries[index].updated_at => {
                    self.doc.entries[index] = entry;
                    summary.applied += 1;
                }
                Some(_) => summary.ignored += 1,
                None => {
                    self.doc.entries.push(entry);
                    summary.applied += 1;
                }
            }
        }
        for item in incoming.schedules {
            match self.doc.schedules.iter().position(|s| s.id == item.id) {
                Some(index) if item.updated_at > self.doc.schedules[index].updated_at => {
                    self.doc.schedules[index] = item;
                    summary.applied += 1;
                }
                Some(_) => summary.ignored += 1,
                None => {
                    self.doc.schedules.push(item);
                    summary.applied += 1;
                }
            }
        }

        self.persist();
        self.notify(ChangeKind::Entries);
        self.notify(ChangeKind::Schedules);
        summary
    }

    // ---- internals ----

    fn persist(&mut self) {
        let Some(encoded) = encode_document(&self.doc) else {
            self.degraded = true;
            warn!("event=persist module=store status=error reason=encode");
            return;
        };
        if self.kv.set(STORAGE_KEY, &encoded) {
            self.degraded = false;
        } else {
            self.degraded = true;
            warn!("event=persist module=store status=error reason=write");
        }
    }

    fn notify(&self, kind: ChangeKind) {
        for listener in &self.listeners {
            listener(kind);
        }
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
