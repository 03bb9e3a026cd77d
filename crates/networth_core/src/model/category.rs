//! Category model.
//!
//! # Responsibility
//! - Group items under a named asset or liability heading.
//!
//! # Invariants
//! - `id` is unique within one document.
//! - Deleting a category also deletes every item that references it.

use serde::{Deserialize, Serialize};

/// Stable identifier for categories and items.
///
/// Seed data uses readable slugs (`bank-account`), generated ids are UUID text.
pub type EntityId = String;

/// Color tag applied to categories created at runtime.
pub const DEFAULT_CATEGORY_COLOR: &str = "bg-teal-500";

/// Side of the balance sheet a category contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    /// Counted in total assets.
    Asset,
    /// Counted in total liabilities.
    Liability,
}

impl CategoryType {
    /// Returns the wire name (`asset|liability`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
        }
    }

    /// Parses a wire name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asset" => Some(Self::Asset),
            "liability" => Some(Self::Liability),
            _ => None,
        }
    }
}

/// Named grouping of financial items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    /// Serialized as `type` to match the stored document.
    #[serde(rename = "type")]
    pub kind: CategoryType,
    /// Display sort key among categories of the same `kind`.
    #[serde(deserialize_with = "crate::model::wire::sort_order")]
    pub order: u32,
    pub color: String,
}

impl Category {
    /// Creates a category with the default color.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        kind: CategoryType,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            order,
            color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }
}
