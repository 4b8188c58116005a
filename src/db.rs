//! Database module for Gutenberg Search
//! Key/value SQLite store standing in for browser local storage

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result};
use std::path::Path;
use tracing::debug;

/// A value read back from the cache
#[derive(Debug, Clone)]
pub struct CachedValue {
    pub value: String,
    pub stored_at: Option<DateTime<Utc>>,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        debug!(path = %path.display(), "Database opened");
        Ok(db)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS cache (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                stored_at TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a cached value
    pub fn get_cached(&self, key: &str) -> Result<Option<CachedValue>> {
        self.conn
            .query_row(
                "SELECT value, stored_at FROM cache WHERE key = ?1",
                params![key],
                |row| {
                    let stored_at: String = row.get(1)?;
                    Ok(CachedValue {
                        value: row.get(0)?,
                        stored_at: DateTime::parse_from_rfc3339(&stored_at)
                            .ok()
                            .map(|t| t.with_timezone(&Utc)),
                    })
                },
            )
            .optional()
    }

    /// Insert or replace a cached value
    pub fn set_cached(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO cache (key, value, stored_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                stored_at = excluded.stored_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        debug!(key = key, bytes = value.len(), "Cache entry written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_cached("nope").unwrap().is_none());
    }

    #[test]
    fn set_then_get_returns_value_and_timestamp() {
        let db = Database::open_in_memory().unwrap();
        let before = Utc::now();
        db.set_cached("k", "hello").unwrap();

        let cached = db.get_cached("k").unwrap().unwrap();
        assert_eq!(cached.value, "hello");
        let stored_at = cached.stored_at.unwrap();
        assert!(stored_at >= before - chrono::Duration::seconds(1));
    }

    #[test]
    fn set_replaces_existing_value() {
        let db = Database::open_in_memory().unwrap();
        db.set_cached("k", "first").unwrap();
        db.set_cached("k", "second").unwrap();
        assert_eq!(db.get_cached("k").unwrap().unwrap().value, "second");
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        {
            let db = Database::open(&path).unwrap();
            db.set_cached("k", "persisted").unwrap();
        }
        let db = Database::open(&path).unwrap();
        assert_eq!(db.get_cached("k").unwrap().unwrap().value, "persisted");
    }
}
