//! SQLite settings backend with in-memory cache.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;
use rusqlite::{Connection, OptionalExtension};

use super::{SettingsBackend, SettingsError};

/// SQLite-backed settings storage with a DashMap read cache.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
    cache: DashMap<String, Vec<u8>>,
}

impl SqliteBackend {
    /// Open (or create) the settings database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::with_connection(Connection::open(path)?)
    }

    /// A throwaway store for when there is no data directory.
    pub fn in_memory() -> Result<Self, SettingsError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, SettingsError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            cache: DashMap::new(),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettingsBackend for SqliteBackend {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        let result: Option<Vec<u8>> = self
            .conn()
            .query_row("SELECT value FROM settings WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;

        if let Some(ref value) = result {
            self.cache.insert(key.to_string(), value.clone());
        }
        Ok(result)
    }

    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError> {
        self.conn().execute(
            "INSERT INTO settings (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, &value],
        )?;

        self.cache.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        let backend = SqliteBackend::in_memory().unwrap();
        assert_eq!(backend.get_bytes("nope").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.set_bytes("k", vec![1, 2]).unwrap();
        backend.set_bytes("k", vec![3]).unwrap();
        assert_eq!(backend.get_bytes("k").unwrap(), Some(vec![3]));
    }

    #[test]
    fn test_reads_through_cache_miss() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.set_bytes("k", vec![7]).unwrap();
        backend.cache.clear();

        assert_eq!(backend.get_bytes("k").unwrap(), Some(vec![7]));
        assert!(backend.cache.contains_key("k"));
    }
}
