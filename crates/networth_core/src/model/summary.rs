//! Derived per-month summary. Never persisted.

use serde::Serialize;

/// Totals and month-over-month movement for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub month: String,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    /// Zero for the first month of a summarized range.
    pub change: f64,
    /// Percentage; zero when the previous net worth is zero.
    pub change_rate: f64,
}
