//! Reactive net-worth store.
//!
//! # Responsibility
//! - Hold the canonical document in memory.
//! - Apply the fixed set of mutation actions and notify observers.
//! - Expose derived read-only views of the document.
//!
//! # Invariants
//! - Every action validates its input before touching state; a failed action
//!   leaves the document unchanged and notifies nobody.
//! - Observers run synchronously, in subscription order, after each change.
//! - Stores opened over storage persist every change through an observer.

mod net_worth_store;
mod observer;
mod update;

pub use net_worth_store::NetWorthStore;
pub use observer::{PersistenceObserver, StoreObserver, SubscriptionId};
pub use update::{CategoryUpdate, ItemUpdate};

use crate::calc::month::MonthError;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store actions.
#[derive(Debug)]
pub enum StoreError {
    /// Import payload was rejected; state is unchanged.
    InvalidImport(StorageError),
    /// Referenced category does not exist.
    CategoryNotFound(String),
    /// Month token is not a real `YYYY-MM` month.
    InvalidMonth(MonthError),
    /// Amount is NaN or infinite and cannot round-trip through JSON.
    InvalidValue { item_id: String, value: f64 },
    /// Export serialization failed.
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidImport(err) => write!(f, "{err}"),
            Self::CategoryNotFound(id) => write!(f, "category not found: {id}"),
            Self::InvalidMonth(err) => write!(f, "{err}"),
            Self::InvalidValue { item_id, value } => {
                write!(f, "value {value} for item {item_id} is not a finite number")
            }
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidImport(err) => Some(err),
            Self::InvalidMonth(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::CategoryNotFound(_) | Self::InvalidValue { .. } => None,
        }
    }
}

impl From<MonthError> for StoreError {
    fn from(value: MonthError) -> Self {
        Self::InvalidMonth(value)
    }
}
