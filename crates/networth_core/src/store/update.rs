//! Field-by-field update requests.
//!
//! `None` leaves a field untouched. Ids are never updatable.

use crate::model::category::{Category, CategoryType};
use crate::model::item::{Item, MonthlyValues};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub kind: Option<CategoryType>,
    pub order: Option<u32>,
    pub color: Option<String>,
}

impl CategoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none() && self.order.is_none() && self.color.is_none()
    }

    pub(crate) fn apply_to(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(kind) = self.kind {
            category.kind = kind;
        }
        if let Some(order) = self.order {
            category.order = order;
        }
        if let Some(color) = &self.color {
            category.color = color.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemUpdate {
    /// Moves the item to another category, which must exist.
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub order: Option<u32>,
    /// Replaces the whole month map.
    pub monthly_values: Option<MonthlyValues>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.name.is_none()
            && self.order.is_none()
            && self.monthly_values.is_none()
    }

    pub(crate) fn apply_to(&self, item: &mut Item) {
        if let Some(category_id) = &self.category_id {
            item.category_id = category_id.clone();
        }
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(order) = self.order {
            item.order = order;
        }
        if let Some(monthly_values) = &self.monthly_values {
            item.monthly_values = monthly_values.clone();
        }
    }
}
