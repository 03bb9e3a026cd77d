//! Core state management for the net-worth tracker.
//! This crate is the single source of truth for the tracked document.

pub mod calc;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod storage;
pub mod store;

pub use calc::format::{format_currency, format_month};
pub use calc::month::{current_month, month_range, next_month, previous_month, MonthError};
pub use calc::{
    category_total, change_rate, generate_id, monthly_change, monthly_summaries, net_worth,
    total_assets, total_liabilities,
};
pub use config::{AppPaths, ConfigError};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::category::{Category, CategoryType, EntityId};
pub use model::document::{NetWorthData, DISPLAY_MONTH_COUNT};
pub use model::item::{Item, MonthlyValues};
pub use model::summary::MonthlySummary;
pub use repo::slot_repo::{
    HeadlessSlotRepository, MemorySlotRepository, RepoError, RepoResult, SlotRepository,
    SqliteSlotRepository,
};
pub use storage::{
    default_document, default_document_for, export_document, import_document, DocumentStorage,
    StorageError, StorageResult, CORRUPT_BACKUP_KEY, STORAGE_KEY,
};
pub use store::{
    CategoryUpdate, ItemUpdate, NetWorthStore, PersistenceObserver, StoreError, StoreObserver,
    StoreResult, SubscriptionId,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
