//! Slot repository contracts and implementations.
//!
//! # Responsibility
//! - Provide get/put access to named string slots.
//! - Offer SQLite, in-memory and headless backends behind one trait.
//!
//! # Invariants
//! - `write_slot` replaces any previous value under the same key.
//! - Headless backends report `is_available() == false` and never fail.

use crate::db::{open_db, open_db_in_memory, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::rc::Rc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error raised by slot backends.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Backend rejected the write, e.g. quota or read-only media.
    WriteRejected(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::WriteRejected(message) => write!(f, "slot write rejected: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::WriteRejected(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for named string slots.
pub trait SlotRepository {
    /// Whether this backend persists anything at all.
    fn is_available(&self) -> bool {
        true
    }

    fn read_slot(&self, key: &str) -> RepoResult<Option<String>>;

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()>;
}

impl<R: SlotRepository + ?Sized> SlotRepository for Box<R> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).write_slot(key, value)
    }
}

/// SQLite-backed slot repository (table `kv_slots`).
pub struct SqliteSlotRepository {
    conn: Connection,
}

impl SqliteSlotRepository {
    /// Wraps a connection that already has migrations applied.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens (and migrates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens a migrated in-memory database; slots vanish with the repository.
    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl SlotRepository for SqliteSlotRepository {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local slot map.
///
/// Clones share the same slots, so a caller can keep a handle and inspect
/// what a store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotRepository {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the slot value, if present.
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl SlotRepository for MemorySlotRepository {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend for non-interactive contexts with no persistent storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSlotRepository;

impl SlotRepository for HeadlessSlotRepository {
    fn is_available(&self) -> bool {
        false
    }

    fn read_slot(&self, _key: &str) -> RepoResult<Option<String>> {
        Ok(None)
    }

    fn write_slot(&self, _key: &str, _value: &str) -> RepoResult<()> {
        Ok(())
    }
}
