//! Synchronous key-value port and its backends.
//!
//! # Responsibility
//! - Define the string-keyed get/set contract the store persists through.
//! - Ship a SQLite-backed durable port and an in-memory port for tests.
//!
//! # Invariants
//! - Both operations are synchronous and non-throwing: backend failures
//!   are logged and reported as a missing value or a `false` write.

use crate::db::{migrations, DbError, DbResult};
use log::error;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

/// Storage contract the store writes documents through.
///
/// Modeled on browser local storage: get returns the stored string or
/// nothing; set reports whether the value was durably written. Callers
/// treat a `false` write as degraded persistence, not as a failure of
/// the operation that triggered it.
pub trait KeyValuePort {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    /// Returns `false` when the backend rejected the write.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// Volatile port for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryKv {
    values: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValuePort for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.values.insert(key.to_string(), value.to_string());
        true
    }
}

/// Durable port over the `documents` table.
#[derive(Debug)]
pub struct SqliteKv {
    conn: Connection,
}

impl SqliteKv {
    /// Wraps a migrated connection; rejects one whose schema version does
    /// not match this binary.
    pub fn try_new(conn: Connection) -> DbResult<Self> {
        let db_version = migrations::schema_version(&conn)?;
        let required = migrations::latest_version();
        if db_version < required {
            return Err(DbError::SchemaNotMigrated {
                db_version,
                required,
            });
        }
        if db_version > required {
            return Err(DbError::UnsupportedSchemaVersion {
                db_version,
                latest_supported: required,
            });
        }
        Ok(Self { conn })
    }
}

impl KeyValuePort for SqliteKv {
    fn get(&self, key: &str) -> Option<String> {
        let result = self
            .conn
            .query_row(
                "SELECT value FROM documents WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional();

        match result {
            Ok(value) => value,
            Err(err) => {
                error!("event=kv_read module=store status=error key={key} error={err}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        let result = self.conn.execute(
            "INSERT INTO documents (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                written_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        );

        match result {
            Ok(_) => true,
            Err(err) => {
                error!("event=kv_write module=store status=error key={key} error={err}");
                false
            }
        }
    }
}
