//! Lenient readers for numeric fields in stored documents.
//!
//! Older clients wrote non-finite amounts as JSON `null` and never enforced
//! integer sort keys, so a stored document may carry either.

use crate::model::item::MonthlyValues;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Reads month amounts, treating `null` as zero.
pub(crate) fn monthly_values<'de, D>(deserializer: D) -> Result<MonthlyValues, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<f64>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(month, value)| (month, value.unwrap_or(0.0)))
        .collect())
}

/// Reads a sort key from any JSON number, rounded and clamped into `u32`.
/// `null` reads as zero.
pub(crate) fn sort_order<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    if !raw.is_finite() {
        return Err(D::Error::custom("order must be a finite number"));
    }
    Ok(raw.round().clamp(0.0, f64::from(u32::MAX)) as u32)
}

#[cfg(test)]
mod tests {
    use crate::model::category::Category;
    use crate::model::item::Item;
    use serde_json::json;

    #[test]
    fn null_amount_reads_as_zero() {
        let item: Item = serde_json::from_value(json!({
            "id": "wallet",
            "categoryId": "cash",
            "name": "Wallet",
            "order": 1,
            "monthlyValues": { "2025-01": 40.0, "2025-02": null }
        }))
        .unwrap();
        assert_eq!(item.value_for("2025-01"), 40.0);
        assert_eq!(item.monthly_values.get("2025-02"), Some(&0.0));
    }

    #[test]
    fn fractional_order_is_rounded() {
        let item: Item = serde_json::from_value(json!({
            "id": "wallet",
            "categoryId": "cash",
            "name": "Wallet",
            "order": 1.5
        }))
        .unwrap();
        assert_eq!(item.order, 2);

        let category: Category = serde_json::from_value(json!({
            "id": "cash",
            "name": "Cash",
            "type": "asset",
            "order": -3,
            "color": "bg-teal-500"
        }))
        .unwrap();
        assert_eq!(category.order, 0);
    }

    #[test]
    fn non_numeric_order_is_rejected() {
        let parsed = serde_json::from_value::<Item>(json!({
            "id": "wallet",
            "categoryId": "cash",
            "name": "Wallet",
            "order": "first"
        }));
        assert!(parsed.is_err());
    }
}
