//! Document store: key-value port, codec and CRUD surface.
//!
//! # Responsibility
//! - Define the synchronous key-value contract the store persists through.
//! - Own all diary/schedule records and their mutation paths.
//!
//! # Invariants
//! - Every mutation persists the full document before returning.
//! - Validation failures leave both memory and storage untouched.
//! - A failed storage write degrades the store but never aborts an
//!   operation.

use crate::model::entry::EntryId;
use crate::model::schedule::ScheduleId;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod document;
pub mod entry_store;
pub mod kv;

pub use document::{StoreDocument, STORAGE_KEY};
pub use entry_store::{ChangeKind, EntryStore, ImportSummary, MergeSummary};
pub use kv::{KeyValuePort, MemoryKv, SqliteKv};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation error.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    EntryNotFound(EntryId),
    ScheduleNotFound(ScheduleId),
    /// Import input was not a JSON document at all.
    MalformedDocument(String),
    /// The in-memory document could not be serialized.
    Encode(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::EntryNotFound(id) => write!(f, "diary entry not found: {id}"),
            Self::ScheduleNotFound(id) => write!(f, "schedule item not found: {id}"),
            Self::MalformedDocument(message) => write!(f, "malformed document: {message}"),
            Self::Encode(message) => write!(f, "document encode failed: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
