//! Root persisted document.
//!
//! # Invariants
//! - `display_months` holds six consecutive months starting at
//!   `current_month` after any navigation.
//! - The document is the single source of truth for every derived view.

use crate::model::category::Category;
use crate::model::item::Item;
use serde::{Deserialize, Serialize};

/// Number of months shown in the sliding display window.
pub const DISPLAY_MONTH_COUNT: usize = 6;

/// Complete state of the tracker, stored as one JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthData {
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
    pub current_month: String,
    pub display_months: Vec<String>,
}

impl NetWorthData {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.category(id).is_some()
    }
}
