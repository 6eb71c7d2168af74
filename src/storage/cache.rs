//! SQLite-backed HTTP response cache

use crate::storage::schema::initialize_schema;
use crate::storage::{CachedResponse, StorageResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Response cache shared by every fetch of a run
///
/// Only successful responses are stored. The cache never expires entries on
/// its own; callers clear it explicitly.
pub struct ResponseCache {
    conn: Connection,
}

impl ResponseCache {
    /// Opens (or creates) the cache database at `path`
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates a cache that lives only as long as this value
    pub fn in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Looks up the cached response for `url`
    pub fn get(&self, url: &str) -> StorageResult<Option<CachedResponse>> {
        let mut stmt = self
            .conn
            .prepare("SELECT url, status_code, body, fetched_at FROM responses WHERE url = ?1")?;

        let response = stmt
            .query_row(params![url], |row| {
                Ok(CachedResponse {
                    url: row.get(0)?,
                    status_code: row.get(1)?,
                    body: row.get(2)?,
                    fetched_at: row.get(3)?,
                })
            })
            .optional()?;

        Ok(response)
    }

    /// Stores (or replaces) the response for `url`
    pub fn put(&self, url: &str, status_code: u16, body: &[u8]) -> StorageResult<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO responses (url, status_code, body, fetched_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(url) DO UPDATE SET
                status_code = excluded.status_code,
                body = excluded.body,
                fetched_at = excluded.fetched_at",
            params![url, status_code, body, now],
        )?;
        Ok(())
    }

    /// Removes every cached response, returning how many were dropped
    pub fn clear(&self) -> StorageResult<usize> {
        let removed = self.conn.execute("DELETE FROM responses", [])?;
        Ok(removed)
    }

    /// Number of cached responses
    pub fn len(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM responses", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}
