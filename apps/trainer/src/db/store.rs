//! SQLite-backed key-value store.

use crate::db::error::DbError;
use crate::db::schema::{SCHEMA, SCHEMA_VERSION};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use vocab_core::{KeyValueStore, StoreError};

type Result<T> = std::result::Result<T, DbError>;

/// Persistent string store over a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating it and its directory if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
        self.read(key).map_err(Into::into)
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
        self.write(key, value).map_err(Into::into)
    }

    fn remove(&self, key: &str) -> std::result::Result<(), StoreError> {
        self.delete(key).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::{PROGRESS_KEY, USERNAME_KEY};

    fn count(store: &SqliteStore, sql: &str) -> i64 {
        store.conn.query_row(sql, [], |row| row.get(0)).unwrap()
    }

    #[test]
    fn set_get_and_overwrite() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get(USERNAME_KEY).unwrap(), None);

        store.set(USERNAME_KEY, "ada").unwrap();
        store.set(USERNAME_KEY, "grace").unwrap();
        assert_eq!(store.get(USERNAME_KEY).unwrap().as_deref(), Some("grace"));
        assert_eq!(count(&store, "SELECT COUNT(*) FROM kv_store"), 1);
    }

    #[test]
    fn remove_deletes_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set(PROGRESS_KEY, "{}").unwrap();
        store.remove(PROGRESS_KEY).unwrap();
        assert_eq!(store.get(PROGRESS_KEY).unwrap(), None);
        assert_eq!(count(&store, "SELECT COUNT(*) FROM kv_store"), 0);
    }

    #[test]
    fn initialize_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.initialize().unwrap();
        assert_eq!(count(&store, "SELECT COUNT(*) FROM schema_version"), 1);
        assert_eq!(
            count(&store, "SELECT MAX(version) FROM schema_version"),
            i64::from(SCHEMA_VERSION)
        );
    }

    #[test]
    fn reopen_file_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("trainer.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.set(USERNAME_KEY, "ada").unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get(USERNAME_KEY).unwrap().as_deref(), Some("ada"));
    }
}
