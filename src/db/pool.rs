//! Short-lived SQLite session wrapper.
//!
//! Every UI action opens its own `DbPool`, runs one statement (or a small
//! fixed sequence) and drops it. Nothing is shared between actions.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file and enable foreign key enforcement.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path)).map_err(|e| unavailable(path, e))?;
        Self::configure(conn, path)
    }

    /// Open an existing database file; fails instead of creating a new one.
    pub fn open_existing(path: &str) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::StoreUnavailable {
                path: path.to_string(),
                reason: "file does not exist (run `incidentlog init` first)".to_string(),
            });
        }

        let conn = Connection::open_with_flags(
            Path::new(path),
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| unavailable(path, e))?;
        Self::configure(conn, path)
    }

    fn configure(conn: Connection, path: &str) -> AppResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| unavailable(path, e))?;
        Ok(Self { conn })
    }
}

fn unavailable(path: &str, e: rusqlite::Error) -> AppError {
    AppError::StoreUnavailable {
        path: path.to_string(),
        reason: e.to_string(),
    }
}
