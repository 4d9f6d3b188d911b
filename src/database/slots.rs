//! Whole-value access to the named persistence slots.
//!
//! The store keeps its state in two slots, each a single JSON document:
//! `savedVideos` (the ordered record list) and `userSettings`. Mutations are
//! read-modify-write over the full slot value; only the store component
//! writes these slots.

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::errors::StorageError;

/// Slot holding the ordered list of saved video records.
pub const VIDEOS_SLOT: &str = "savedVideos";

/// Slot holding the persisted user settings.
pub const SETTINGS_SLOT: &str = "userSettings";

/// Reads and deserializes a slot value. `Ok(None)` when the slot has never
/// been written.
pub fn read<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>, StorageError> {
    let raw: Option<String> = conn
        .query_row("SELECT value FROM slots WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| StorageError::Unavailable(e.to_string()))?;

    match raw {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| StorageError::Malformed(e.to_string())),
        None => Ok(None),
    }
}

/// Serializes and writes a slot value, replacing any previous value.
pub fn write<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<(), StorageError> {
    let json =
        serde_json::to_string(value).map_err(|e| StorageError::Malformed(e.to_string()))?;
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    conn.execute(
        "INSERT OR REPLACE INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)",
        params![key, json, now],
    )
    .map_err(|e| StorageError::Unavailable(e.to_string()))?;
    Ok(())
}

/// Returns the raw JSON text of a slot, if present. Used by tests to assert
/// the wire format of persisted values.
pub fn read_raw(conn: &Connection, key: &str) -> Result<Option<String>, StorageError> {
    conn.query_row("SELECT value FROM slots WHERE key = ?1", params![key], |row| {
        row.get(0)
    })
    .optional()
    .map_err(|e| StorageError::Unavailable(e.to_string()))
}
