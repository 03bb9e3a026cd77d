//! Canonical document holder with observer notification.

use super::observer::{FnObserver, PersistenceObserver, StoreObserver, SubscriptionId};
use super::update::{CategoryUpdate, ItemUpdate};
use super::{StoreError, StoreResult};
use crate::calc::month::{month_range, parse_month};
use crate::calc::{generate_id, monthly_summaries};
use crate::model::category::{Category, CategoryType};
use crate::model::document::{NetWorthData, DISPLAY_MONTH_COUNT};
use crate::model::item::Item;
use crate::model::summary::MonthlySummary;
use crate::repo::slot_repo::SlotRepository;
use crate::storage::{default_document, export_document, import_document, DocumentStorage};
use log::{debug, error, info};
use std::collections::BTreeMap;

/// In-memory owner of the net-worth document.
///
/// Construct one per process and pass it to whatever renders it.
pub struct NetWorthStore {
    data: NetWorthData,
    observers: Vec<(SubscriptionId, Box<dyn StoreObserver>)>,
    next_subscription: u64,
}

impl NetWorthStore {
    /// Creates a store over `data` with no observers.
    pub fn new(data: NetWorthData) -> Self {
        Self {
            data,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Loads the document from storage and persists every later change to it.
    pub fn open<R: SlotRepository + 'static>(storage: DocumentStorage<R>) -> Self {
        let mut store = Self::new(storage.load());
        info!(
            "event=store_open module=store status=ok persistence={} current_month={}",
            storage.is_persistence_available(),
            store.data.current_month
        );
        store.subscribe(PersistenceObserver::new(storage));
        store
    }

    /// Registers an observer and immediately calls it with the current value.
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        let mut observer: Box<dyn StoreObserver> = Box::new(observer);
        observer.on_change(&self.data);
        self.observers.push((id, observer));
        id
    }

    /// Closure flavor of [`NetWorthStore::subscribe`].
    pub fn subscribe_fn(&mut self, f: impl FnMut(&NetWorthData) + 'static) -> SubscriptionId {
        self.subscribe(FnObserver(f))
    }

    /// Removes an observer. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    // Derived views.

    pub fn data(&self) -> &NetWorthData {
        &self.data
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn items(&self) -> &[Item] {
        &self.data.items
    }

    pub fn current_month(&self) -> &str {
        &self.data.current_month
    }

    pub fn display_months(&self) -> &[String] {
        &self.data.display_months
    }

    /// Summaries for the display window.
    pub fn monthly_summaries(&self) -> Vec<MonthlySummary> {
        monthly_summaries(
            &self.data.display_months,
            &self.data.categories,
            &self.data.items,
        )
    }

    /// Categories of one type, in document order.
    pub fn categories_by_type(&self, kind: CategoryType) -> Vec<&Category> {
        self.data
            .categories
            .iter()
            .filter(|category| category.kind == kind)
            .collect()
    }

    pub fn asset_categories(&self) -> Vec<&Category> {
        self.categories_by_type(CategoryType::Asset)
    }

    pub fn liability_categories(&self) -> Vec<&Category> {
        self.categories_by_type(CategoryType::Liability)
    }

    /// Items grouped by category id, each group sorted by `order` ascending.
    ///
    /// Categories without items have no entry.
    pub fn items_by_category(&self) -> BTreeMap<&str, Vec<&Item>> {
        let mut grouped: BTreeMap<&str, Vec<&Item>> = BTreeMap::new();
        for item in &self.data.items {
            grouped
                .entry(item.category_id.as_str())
                .or_default()
                .push(item);
        }
        for items in grouped.values_mut() {
            items.sort_by_key(|item| item.order);
        }
        grouped
    }

    // Category actions.

    /// Appends a category after the highest `order` of the same type.
    pub fn add_category(&mut self, name: impl Into<String>, kind: CategoryType) -> String {
        let order = next_order(
            self.data
                .categories
                .iter()
                .filter(|category| category.kind == kind)
                .map(|category| category.order),
        );
        let id = generate_id();
        let category = Category::new(id.clone(), name, kind, order);

        self.commit("add_category", |data| data.categories.push(category));
        id
    }

    /// Merges `update` into the matching category. Unknown ids are a no-op.
    pub fn update_category(&mut self, id: &str, update: &CategoryUpdate) -> bool {
        let mut found = false;
        self.commit("update_category", |data| {
            if let Some(category) = data.categories.iter_mut().find(|c| c.id == id) {
                update.apply_to(category);
                found = true;
            }
        });
        found
    }

    /// Removes the category and every item that belongs to it.
    pub fn delete_category(&mut self, id: &str) -> bool {
        let mut found = false;
        self.commit("delete_category", |data| {
            let before = data.categories.len();
            data.categories.retain(|category| category.id != id);
            data.items.retain(|item| item.category_id != id);
            found = data.categories.len() != before;
        });
        found
    }

    // Item actions.

    /// Appends an item after the highest `order` within `category_id`.
    pub fn add_item(&mut self, category_id: &str, name: impl Into<String>) -> StoreResult<String> {
        self.ensure_category(category_id)?;

        let order = next_order(
            self.data
                .items
                .iter()
                .filter(|item| item.category_id == category_id)
                .map(|item| item.order),
        );
        let id = generate_id();
        let item = Item::new(id.clone(), category_id, name, order);

        self.commit("add_item", |data| data.items.push(item));
        Ok(id)
    }

    /// Merges `update` into the matching item. Unknown ids are a no-op.
    pub fn update_item(&mut self, id: &str, update: &ItemUpdate) -> StoreResult<bool> {
        if let Some(category_id) = &update.category_id {
            self.ensure_category(category_id)?;
        }
        if let Some(values) = &update.monthly_values {
            for (month, value) in values {
                self.ensure_value(id, month, *value)?;
            }
        }

        let mut found = false;
        self.commit("update_item", |data| {
            if let Some(item) = data.items.iter_mut().find(|item| item.id == id) {
                update.apply_to(item);
                found = true;
            }
        });
        Ok(found)
    }

    /// Sets or overwrites one month's value on the matching item.
    pub fn update_item_value(&mut self, id: &str, month: &str, value: f64) -> StoreResult<bool> {
        self.ensure_value(id, month, value)?;

        let mut found = false;
        self.commit("update_item_value", |data| {
            if let Some(item) = data.items.iter_mut().find(|item| item.id == id) {
                item.monthly_values.insert(month.to_string(), value);
                found = true;
            }
        });
        Ok(found)
    }

    pub fn delete_item(&mut self, id: &str) -> bool {
        let mut found = false;
        self.commit("delete_item", |data| {
            let before = data.items.len();
            data.items.retain(|item| item.id != id);
            found = data.items.len() != before;
        });
        found
    }

    // Navigation and data management.

    /// Moves the display window to start at `month`.
    pub fn navigate_to_month(&mut self, month: &str) -> StoreResult<()> {
        let display_months = month_range(month, DISPLAY_MONTH_COUNT)?;
        let current_month = display_months
            .first()
            .cloned()
            .unwrap_or_else(|| month.to_string());

        self.commit("navigate_to_month", |data| {
            data.current_month = current_month;
            data.display_months = display_months;
        });
        Ok(())
    }

    /// Serializes the current document as pretty-printed JSON.
    pub fn export_data(&self) -> StoreResult<String> {
        export_document(&self.data).map_err(StoreError::Storage)
    }

    /// Replaces the document with the parsed payload.
    ///
    /// # Errors
    /// - `StoreError::InvalidImport` when the text is not a JSON document;
    ///   state is left unchanged.
    pub fn import_data(&mut self, text: &str) -> StoreResult<()> {
        let data = import_document(text).map_err(|err| {
            error!(
                "event=store_import module=store status=error error_code=invalid_import error={}",
                err.detail()
            );
            StoreError::InvalidImport(err)
        })?;

        self.commit("import_data", |current| *current = data);
        Ok(())
    }

    /// Replaces the document with fresh seed data.
    pub fn reset_data(&mut self) {
        let data = default_document();
        self.commit("reset_data", |current| *current = data);
    }

    fn ensure_category(&self, category_id: &str) -> StoreResult<()> {
        if self.data.has_category(category_id) {
            Ok(())
        } else {
            Err(StoreError::CategoryNotFound(category_id.to_string()))
        }
    }

    fn ensure_value(&self, item_id: &str, month: &str, value: f64) -> StoreResult<()> {
        parse_month(month)?;
        if !value.is_finite() {
            return Err(StoreError::InvalidValue {
                item_id: item_id.to_string(),
                value,
            });
        }
        Ok(())
    }

    fn commit(&mut self, action: &str, mutate: impl FnOnce(&mut NetWorthData)) {
        mutate(&mut self.data);
        debug!(
            "event=store_action module=store status=ok action={} categories={} items={} observers={}",
            action,
            self.data.categories.len(),
            self.data.items.len(),
            self.observers.len()
        );

        for (_, observer) in &mut self.observers {
            observer.on_change(&self.data);
        }
    }
}

fn next_order(orders: impl Iterator<Item = u32>) -> u32 {
    orders.max().unwrap_or(0).saturating_add(1)
}
