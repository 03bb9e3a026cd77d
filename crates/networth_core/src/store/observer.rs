//! Store observers.

use crate::model::document::NetWorthData;
use crate::repo::slot_repo::SlotRepository;
use crate::storage::DocumentStorage;

/// Handle returned by `NetWorthStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Receives the full document after every change.
pub trait StoreObserver {
    fn on_change(&mut self, data: &NetWorthData);
}

pub(crate) struct FnObserver<F>(pub(crate) F);

impl<F: FnMut(&NetWorthData)> StoreObserver for FnObserver<F> {
    fn on_change(&mut self, data: &NetWorthData) {
        (self.0)(data);
    }
}

/// Saves every new document value through the storage adapter.
pub struct PersistenceObserver<R: SlotRepository> {
    storage: DocumentStorage<R>,
}

impl<R: SlotRepository> PersistenceObserver<R> {
    pub fn new(storage: DocumentStorage<R>) -> Self {
        Self { storage }
    }
}

impl<R: SlotRepository> StoreObserver for PersistenceObserver<R> {
    fn on_change(&mut self, data: &NetWorthData) {
        self.storage.save(data);
    }
}
