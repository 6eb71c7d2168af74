//! Storage module for the cross-request response cache
//!
//! This module handles:
//! - SQLite database initialization and schema management
//! - Storing and looking up successful HTTP responses by URL
//! - Clearing the cache on request

mod cache;
mod schema;

pub use cache::ResponseCache;

use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A response as stored in the cache
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub url: String,
    pub status_code: u16,
    pub body: Vec<u8>,
    pub fetched_at: String,
}
