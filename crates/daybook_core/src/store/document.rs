//! Persisted document shape and codec.
//!
//! # Responsibility
//! - Define the single JSON document holding all collections.
//! - Decode persisted text with soft fallback to an empty document.
//!
//! # Invariants
//! - Missing or unknown top-level keys decode to empty collections.
//! - Corrupt persisted text never propagates an error; the store starts
//!   empty instead.

use crate::model::entry::DiaryEntry;
use crate::model::schedule::ScheduleItem;
use crate::model::working_hours::WorkingHours;
use crate::store::{StoreError, StoreResult};
use log::{error, warn};
use serde::{Deserialize, Serialize};

/// Key the full document is stored under.
pub const STORAGE_KEY: &str = "daybook.v1";

/// The one logical database: all collections in a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub entries: Vec<DiaryEntry>,
    #[serde(default)]
    pub schedules: Vec<ScheduleItem>,
    /// Working-hours window, persisted alongside the records it scopes.
    /// Decoded leniently: older documents stored an empty object here.
    #[serde(default, deserialize_with = "lenient_work")]
    pub work: WorkingHours,
}

fn lenient_work<'de, D>(deserializer: D) -> Result<WorkingHours, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decodes persisted text, falling back to an empty document.
///
/// Availability over consistency: a corrupt document is a local,
/// recoverable condition for single-user data, so it is logged and
/// replaced rather than surfaced.
pub fn decode_document(raw: Option<&str>) -> StoreDocument {
    let Some(raw) = raw else {
        return StoreDocument::default();
    };

    match serde_json::from_str(raw) {
        Ok(document) => document,
        Err(err) => {
            warn!("event=document_decode module=store status=error error={err}");
            StoreDocument::default()
        }
    }
}

/// Encodes the document for storage; `None` when serialization failed.
pub fn encode_document(document: &StoreDocument) -> Option<String> {
    match serde_json::to_string(document) {
        Ok(text) => Some(text),
        Err(err) => {
            error!("event=document_encode module=store status=error error={err}");
            None
        }
    }
}

/// Import decode result: the usable records plus a skip count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedDocument {
    pub entries: Vec<DiaryEntry>,
    pub schedules: Vec<ScheduleItem>,
    pub work: Option<WorkingHours>,
    /// Records dropped because they failed to deserialize or validate.
    pub skipped: usize,
}

/// Decodes an import file leniently.
///
/// The file as a whole must be a JSON object; individual records that
/// fail to deserialize or validate are skipped and counted instead of
/// aborting the import.
pub fn decode_import(raw: &str) -> StoreResult<ImportedDocument> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|err| StoreError::MalformedDocument(err.to_string()))?;
    if !value.is_object() {
        return Err(StoreError::MalformedDocument(
            "top level is not a JSON object".to_string(),
        ));
    }

    let mut imported = ImportedDocument::default();

    for item in array_items(&value, "entries") {
        match serde_json::from_value::<DiaryEntry>(item.clone()) {
            Ok(entry) if entry.validate().is_ok() => imported.entries.push(entry),
            _ => imported.skipped += 1,
        }
    }
    for item in array_items(&value, "schedules") {
        match serde_json::from_value::<ScheduleItem>(item.clone()) {
            Ok(schedule) if schedule.validate().is_ok() => imported.schedules.push(schedule),
            _ => imported.skipped += 1,
        }
    }
    if let Some(work) = value.get("work") {
        match serde_json::from_value::<WorkingHours>(work.clone()) {
            Ok(hours) if hours.validate().is_ok() => imported.work = Some(hours),
            _ => imported.skipped += 1,
        }
    }

    Ok(imported)
}

fn array_items<'a>(
    value: &'a serde_json::Value,
    key: &str,
) -> impl Iterator<Item = &'a serde_json::Value> {
    value
        .get(key)
        .and_then(serde_json::Value::as_array)
        .map(|items| items.iter())
        .into_iter()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::{decode_document, StoreDocument};

    #[test]
    fn decode_falls_back_on_missing_and_corrupt_input() {
        assert_eq!(decode_document(None), StoreDocument::default());
        assert_eq!(decode_document(Some("not json{")), StoreDocument::default());
    }

    #[test]
    fn decode_defaults_missing_collections() {
        let document = decode_document(Some("{\"unknownKey\": 1}"));
        assert!(document.entries.is_empty());
        assert!(document.schedules.is_empty());
    }

    #[test]
    fn decode_tolerates_a_malformed_work_object() {
        let document = decode_document(Some("{\"entries\": [], \"work\": {}}"));
        assert_eq!(document.work, crate::model::working_hours::WorkingHours::default());
    }
}
