//! Pure net-worth calculations.
//!
//! # Responsibility
//! - Derive category totals, balance-sheet totals and net worth per month.
//! - Derive month-over-month change and change rate for a month window.
//!
//! # Invariants
//! - No function here reads or writes state outside its arguments.
//! - `net_worth(m) == total_assets(m) - total_liabilities(m)` exactly.
//! - `change_rate` is exactly `0.0` when the previous net worth is zero, so
//!   the sign of a move away from zero is not reported.

pub mod format;
pub mod month;

use crate::model::category::{Category, CategoryType};
use crate::model::item::Item;
use crate::model::summary::MonthlySummary;
use uuid::Uuid;

/// Sums `month` values of every item in `category_id`.
pub fn category_total(category_id: &str, month: &str, items: &[Item]) -> f64 {
    items
        .iter()
        .filter(|item| item.category_id == category_id)
        .map(|item| item.value_for(month))
        .sum()
}

fn total_for_type(kind: CategoryType, month: &str, categories: &[Category], items: &[Item]) -> f64 {
    categories
        .iter()
        .filter(|category| category.kind == kind)
        .map(|category| category_total(&category.id, month, items))
        .sum()
}

pub fn total_assets(month: &str, categories: &[Category], items: &[Item]) -> f64 {
    total_for_type(CategoryType::Asset, month, categories, items)
}

pub fn total_liabilities(month: &str, categories: &[Category], items: &[Item]) -> f64 {
    total_for_type(CategoryType::Liability, month, categories, items)
}

pub fn net_worth(month: &str, categories: &[Category], items: &[Item]) -> f64 {
    total_assets(month, categories, items) - total_liabilities(month, categories, items)
}

/// Net worth difference between `current` and `previous`.
pub fn monthly_change(
    current: &str,
    previous: &str,
    categories: &[Category],
    items: &[Item],
) -> f64 {
    net_worth(current, categories, items) - net_worth(previous, categories, items)
}

/// Percentage change relative to `|net_worth(previous)|`.
pub fn change_rate(current: &str, previous: &str, categories: &[Category], items: &[Item]) -> f64 {
    let previous_net_worth = net_worth(previous, categories, items);
    if previous_net_worth == 0.0 {
        return 0.0;
    }

    let current_net_worth = net_worth(current, categories, items);
    (current_net_worth - previous_net_worth) / previous_net_worth.abs() * 100.0
}

/// Summarizes each month in order.
///
/// The first month has zero change; nothing before the window is consulted.
pub fn monthly_summaries(
    months: &[String],
    categories: &[Category],
    items: &[Item],
) -> Vec<MonthlySummary> {
    months
        .iter()
        .enumerate()
        .map(|(index, month)| {
            let (change, change_rate) = match index.checked_sub(1).map(|prev| &months[prev]) {
                Some(previous) => (
                    monthly_change(month, previous, categories, items),
                    self::change_rate(month, previous, categories, items),
                ),
                None => (0.0, 0.0),
            };

            MonthlySummary {
                month: month.clone(),
                total_assets: total_assets(month, categories, items),
                total_liabilities: total_liabilities(month, categories, items),
                net_worth: net_worth(month, categories, items),
                change,
                change_rate,
            }
        })
        .collect()
}

/// Generates a collision-resistant id from the current time plus randomness.
pub fn generate_id() -> String {
    Uuid::now_v7().simple().to_string()
}
