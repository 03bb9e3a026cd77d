//! Net-worth document model.
//!
//! # Responsibility
//! - Define the persisted document shape and its nested entities.
//! - Define derived, never-persisted summary records.
//!
//! # Invariants
//! - Wire field names are camelCase and stable across versions.
//! - `order` is a sort key only; it is neither contiguous nor unique.
//! - A missing month entry in `monthly_values` means zero.
//! - Stored `null` amounts read as zero; stored sort keys are rounded to integers.

pub mod category;
pub mod document;
pub mod item;
pub mod summary;
mod wire;
