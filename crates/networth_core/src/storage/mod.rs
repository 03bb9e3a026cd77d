//! Document storage adapter.
//!
//! # Responsibility
//! - Load and save the whole document as one JSON blob in a named slot.
//! - Fall back to seed data whenever the slot is absent or unusable.
//! - Own the single JSON import/export policy shared by every caller.
//!
//! # Invariants
//! - `load` never fails; `save` never propagates failures.
//! - A stored blob that cannot be parsed is copied to `CORRUPT_BACKUP_KEY`
//!   before seed data is returned, so the next save never destroys it.
//! - The persisted blob is the bare document, with no envelope or version.
//! - Import accepts exactly what deserializes into `NetWorthData`.

pub mod seed;

use crate::model::document::NetWorthData;
use crate::repo::slot_repo::{RepoError, SlotRepository};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use seed::{default_document, default_document_for};

/// Slot key holding the persisted document.
pub const STORAGE_KEY: &str = "household-net-worth-data";

/// Slot key receiving a stored blob that failed to parse.
pub const CORRUPT_BACKUP_KEY: &str = "household-net-worth-data.corrupt";

/// Fixed message reported for every rejected import payload.
pub const INVALID_IMPORT_MESSAGE: &str = "Invalid JSON format";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Repo(RepoError),
    Serialize(serde_json::Error),
    /// Payload is not JSON, or not shaped like a document.
    InvalidFormat(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize document: {err}"),
            Self::InvalidFormat(_) => write!(f, "{INVALID_IMPORT_MESSAGE}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::InvalidFormat(err) => Some(err),
        }
    }
}

impl StorageError {
    /// Underlying cause text, used in log records.
    pub fn detail(&self) -> String {
        match self.source() {
            Some(source) => source.to_string(),
            None => self.to_string(),
        }
    }
}

impl From<RepoError> for StorageError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Serializes a document as pretty-printed JSON.
pub fn export_document(data: &NetWorthData) -> StorageResult<String> {
    serde_json::to_string_pretty(data).map_err(StorageError::Serialize)
}

/// Parses a document from JSON text.
pub fn import_document(text: &str) -> StorageResult<NetWorthData> {
    serde_json::from_str(text).map_err(StorageError::InvalidFormat)
}

/// Loads and saves the document through a slot repository.
pub struct DocumentStorage<R: SlotRepository> {
    repo: R,
}

impl<R: SlotRepository> DocumentStorage<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn is_persistence_available(&self) -> bool {
        self.repo.is_available()
    }

    /// Loads the stored document, or seed data when nothing usable is stored.
    pub fn load(&self) -> NetWorthData {
        if !self.is_persistence_available() {
            debug!("event=storage_load module=storage status=skipped reason=headless");
            return default_document();
        }

        match self.repo.read_slot(STORAGE_KEY) {
            Ok(Some(text)) => match import_document(&text) {
                Ok(data) => {
                    info!(
                        "event=storage_load module=storage status=ok source=slot categories={} items={}",
                        data.categories.len(),
                        data.items.len()
                    );
                    return data;
                }
                Err(err) => {
                    error!(
                        "event=storage_load module=storage status=error error_code=slot_parse_failed error={}",
                        err.detail()
                    );
                    self.back_up_unreadable(&text);
                }
            },
            Ok(None) => {
                info!("event=storage_load module=storage status=ok source=seed reason=empty_slot");
            }
            Err(err) => {
                error!(
                    "event=storage_load module=storage status=error error_code=slot_read_failed error={}",
                    err
                );
            }
        }

        default_document()
    }

    fn back_up_unreadable(&self, text: &str) {
        match self.repo.write_slot(CORRUPT_BACKUP_KEY, text) {
            Ok(()) => info!(
                "event=storage_backup module=storage status=ok key={} bytes={}",
                CORRUPT_BACKUP_KEY,
                text.len()
            ),
            Err(err) => error!(
                "event=storage_backup module=storage status=error error_code=backup_write_failed error={}",
                err
            ),
        }
    }

    /// Saves the document, logging and swallowing any failure.
    pub fn save(&self, data: &NetWorthData) {
        if let Err(err) = self.try_save(data) {
            error!(
                "event=storage_save module=storage status=error error_code=slot_write_failed error={}",
                err
            );
        }
    }

    /// Saves the document and reports the failure to the caller.
    ///
    /// A headless backend succeeds without writing.
    pub fn try_save(&self, data: &NetWorthData) -> StorageResult<()> {
        if !self.is_persistence_available() {
            return Ok(());
        }

        let text = serde_json::to_string(data).map_err(StorageError::Serialize)?;
        self.repo.write_slot(STORAGE_KEY, &text)?;
        debug!(
            "event=storage_save module=storage status=ok bytes={}",
            text.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DocumentStorage, StorageError, CORRUPT_BACKUP_KEY, STORAGE_KEY};
    use crate::model::document::NetWorthData;
    use crate::repo::slot_repo::{
        HeadlessSlotRepository, MemorySlotRepository, RepoError, RepoResult, SlotRepository,
    };

    struct RejectingRepository;

    impl SlotRepository for RejectingRepository {
        fn read_slot(&self, _key: &str) -> RepoResult<Option<String>> {
            Err(RepoError::WriteRejected("unreadable".to_string()))
        }

        fn write_slot(&self, _key: &str, _value: &str) -> RepoResult<()> {
            Err(RepoError::WriteRejected("quota exceeded".to_string()))
        }
    }

    fn tiny_document() -> NetWorthData {
        NetWorthData {
            categories: Vec::new(),
            items: Vec::new(),
            current_month: "2025-01".to_string(),
            display_months: vec!["2025-01".to_string()],
        }
    }

    #[test]
    fn empty_slot_loads_seed_data() {
        let storage = DocumentStorage::new(MemorySlotRepository::new());
        let data = storage.load();
        assert_eq!(data.categories.len(), 4);
        assert_eq!(data.items.len(), 16);
    }

    #[test]
    fn saved_document_loads_verbatim() {
        let repo = MemorySlotRepository::new();
        let storage = DocumentStorage::new(repo.clone());
        storage.save(&tiny_document());

        assert!(repo.get(STORAGE_KEY).is_some());
        assert_eq!(storage.load(), tiny_document());
    }

    #[test]
    fn corrupt_slot_falls_back_to_seed() {
        let repo = MemorySlotRepository::new();
        repo.write_slot(STORAGE_KEY, "{not json").unwrap();

        let data = DocumentStorage::new(repo.clone()).load();
        assert_eq!(data.items.len(), 16);
        assert_eq!(repo.get(CORRUPT_BACKUP_KEY).as_deref(), Some("{not json"));
    }

    #[test]
    fn failing_backend_is_swallowed_on_save_and_load() {
        let storage = DocumentStorage::new(RejectingRepository);
        storage.save(&tiny_document());
        assert_eq!(storage.load().categories.len(), 4);

        let err = storage.try_save(&tiny_document()).unwrap_err();
        assert!(matches!(err, StorageError::Repo(_)));
    }

    #[test]
    fn headless_backend_degrades_to_defaults() {
        let storage = DocumentStorage::new(HeadlessSlotRepository);
        assert!(!storage.is_persistence_available());
        storage.try_save(&tiny_document()).unwrap();
        assert_eq!(storage.load().items.len(), 16);
    }
}
