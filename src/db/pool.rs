//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One connection is opened per process run and held for the lifetime.
//! File-based single-writer assumption: not safe for concurrent access from
//! multiple processes.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file. Failure here is fatal: the
    /// application cannot run without its store.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))
            .map_err(|_| AppError::StoreUnavailable(path.to_string()))?;
        Ok(Self { conn })
    }
}
