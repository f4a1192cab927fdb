//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! Callers go through store methods; they never execute SQL directly.

mod scenario;

use crate::error::RoiResult;
use rusqlite::{Connection, OpenFlags};

pub struct ScenarioStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

impl ScenarioStore {
    pub fn open(path: &str) -> RoiResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        log::debug!("Opened scenario store at {path}");
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> RoiResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn, path: None })
    }

    /// Reopen a new connection to the same database.
    /// For in-memory databases, this returns a new in-memory database (isolated).
    /// For file-based databases, this opens the same file.
    pub fn reopen(&self) -> RoiResult<Self> {
        match &self.path {
            Some(p) => Self::open(p),
            None => Self::in_memory(),
        }
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> RoiResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_scenarios.sql"))?;
        log::debug!("Scenario store migrated");
        Ok(())
    }
}
