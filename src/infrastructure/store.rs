//! Read access to VS Code's web user-data store.
//!
//! The browser keeps user data in an IndexedDB object store; a snapshot
//! of it is a SQLite database with one key/value table. Keys are
//! path-like strings, values are UTF-8 JSON documents stored as bytes.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};

use crate::domain::{AppError, Result};

/// Table holding the user-data entries, named after the source object store.
const USERDATA_TABLE: &str = "vscode-userdata-store";

/// Abstract key-value view over the user-data store.
///
/// Both operations swallow their failures: a query error yields an empty
/// key list or an absent value, with a warning on the log. Only opening
/// the store can fail the run.
pub trait UserDataStore {
    /// All keys in the store, in storage-defined order.
    fn list_keys(&self) -> Vec<String>;

    /// Raw bytes for a key, or `None` when the key is missing, the value
    /// is not a byte sequence, or the query fails.
    fn get(&self, key: &str) -> Option<Vec<u8>>;
}

/// SQLite-backed implementation of [`UserDataStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a store snapshot in read-only mode.
    ///
    /// # Errors
    /// Returns error if the database cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(path, flags).map_err(AppError::database)?;

        // Optimize for read-only access
        conn.execute_batch(
            "PRAGMA query_only = ON;
             PRAGMA temp_store = MEMORY;",
        )
        .map_err(AppError::database)?;

        Ok(Self { conn })
    }

    fn try_list_keys(&self) -> rusqlite::Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT key FROM \"{USERDATA_TABLE}\""))?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut keys = Vec::new();
        for row in rows {
            match row {
                Ok(key) => keys.push(key),
                Err(e) => {
                    tracing::warn!("Failed to read key row: {}", e);
                }
            }
        }
        Ok(keys)
    }

    fn try_get(&self, key: &str) -> rusqlite::Result<Option<Vec<u8>>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT value FROM \"{USERDATA_TABLE}\" WHERE key = ?1"))?;

        let mut rows = stmt.query([key])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        // Only byte-sequence values qualify; integers, reals and NULLs
        // are not chat documents.
        let value = match row.get_ref(0)? {
            ValueRef::Blob(b) => Some(b.to_vec()),
            ValueRef::Text(t) => Some(t.to_vec()),
            _ => None,
        };
        Ok(value)
    }
}

impl UserDataStore for SqliteStore {
    fn list_keys(&self) -> Vec<String> {
        match self.try_list_keys() {
            Ok(keys) => {
                tracing::debug!("Listed {} keys", keys.len());
                keys
            }
            Err(e) => {
                tracing::warn!("Failed to list keys: {}", e);
                Vec::new()
            }
        }
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to fetch value for {}: {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE \"vscode-userdata-store\" (key TEXT PRIMARY KEY, value BLOB);
             INSERT INTO \"vscode-userdata-store\" VALUES
               ('/User/chatSessions/a.json', X'7B7D'),
               ('/User/settings.json', X'7B7D'),
               ('/User/counter', 42);",
        )
        .unwrap();
        SqliteStore { conn }
    }

    #[test]
    fn test_list_keys_returns_all() {
        let store = seeded_store();
        let keys = store.list_keys();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&"/User/chatSessions/a.json".to_string()));
    }

    #[test]
    fn test_get_blob_value() {
        let store = seeded_store();
        let value = store.get("/User/chatSessions/a.json");
        assert_eq!(value, Some(b"{}".to_vec()));
    }

    #[test]
    fn test_get_non_byte_value_is_none() {
        let store = seeded_store();
        assert_eq!(store.get("/User/counter"), None);
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let store = seeded_store();
        assert_eq!(store.get("/User/nope"), None);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = SqliteStore::open(&dir.path().join("absent.sqlite"));
        assert!(result.is_err());
    }
}
