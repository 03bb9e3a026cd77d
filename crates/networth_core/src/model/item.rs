//! Item model.
//!
//! # Responsibility
//! - Track one account or debt with a value recorded per month.
//!
//! # Invariants
//! - `monthly_values` keys are `YYYY-MM` tokens.
//! - `category_id` should reference an existing category; orphaned items
//!   contribute to no total.

use crate::model::category::EntityId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Month token (`YYYY-MM`) to recorded amount.
pub type MonthlyValues = BTreeMap<String, f64>;

/// Trackable financial line belonging to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: EntityId,
    pub category_id: EntityId,
    pub name: String,
    /// Display sort key among items of the same category.
    #[serde(deserialize_with = "crate::model::wire::sort_order")]
    pub order: u32,
    #[serde(default, deserialize_with = "crate::model::wire::monthly_values")]
    pub monthly_values: MonthlyValues,
}

impl Item {
    /// Creates an item with no recorded values.
    pub fn new(
        id: impl Into<EntityId>,
        category_id: impl Into<EntityId>,
        name: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            order,
            monthly_values: MonthlyValues::new(),
        }
    }

    /// Builder-style helper used by seed data and tests.
    pub fn with_value(mut self, month: impl Into<String>, value: f64) -> Self {
        self.monthly_values.insert(month.into(), value);
        self
    }

    /// Returns the value recorded for `month`, or zero.
    pub fn value_for(&self, month: &str) -> f64 {
        self.monthly_values.get(month).copied().unwrap_or(0.0)
    }
}
