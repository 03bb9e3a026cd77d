//! First-run example document.

use crate::calc::month::{current_month, month_range};
use crate::model::category::{Category, CategoryType};
use crate::model::document::{NetWorthData, DISPLAY_MONTH_COUNT};
use crate::model::item::Item;

const SEED_MONTHS: [&str; 6] = [
    "2025-01", "2025-02", "2025-03", "2025-04", "2025-05", "2025-06",
];

const SEED_CATEGORIES: [(&str, &str, CategoryType, u32); 4] = [
    ("bank-account", "Bank Account", CategoryType::Asset, 1),
    ("financial-asset", "Financial Asset", CategoryType::Asset, 2),
    ("real-estate", "Real Estate", CategoryType::Asset, 3),
    ("liabilities", "Liabilities", CategoryType::Liability, 4),
];

type SeedItem = (&'static str, &'static str, &'static str, u32, [f64; 6]);

const SEED_ITEMS: [SeedItem; 16] = [
    ("checking", "bank-account", "Checking", 1, [1500.0, 32191.0, 0.0, 0.0, 0.0, 7100.0]),
    ("saving", "bank-account", "Saving", 2, [13000.0, 0.0, 500.0, 0.0, 0.0, 0.0]),
    (
        "rrsp-dcpp",
        "financial-asset",
        "RRSP & DCPP",
        1,
        [371896.0, 383505.0, 379419.0, 369744.0, 400387.0, 420719.0],
    ),
    ("tfsa", "financial-asset", "TFSA", 2, [0.0; 6]),
    (
        "resp",
        "financial-asset",
        "RESP",
        3,
        [31658.0, 31094.0, 29070.0, 27750.0, 29337.0, 30626.0],
    ),
    ("addy-investment", "financial-asset", "Addy Investment", 4, [2000.0; 6]),
    (
        "company-stock",
        "financial-asset",
        "Company Stock",
        5,
        [20012.0, 24500.0, 32578.0, 32620.0, 35500.0, 34116.0],
    ),
    ("primary", "real-estate", "Primary", 1, [1_250_000.0; 6]),
    ("townhouse-1", "real-estate", "Townhouse 1", 2, [700_000.0; 6]),
    ("townhouse-2", "real-estate", "Townhouse 2", 3, [760_000.0; 6]),
    ("townhouse-3", "real-estate", "Townhouse 3", 4, [700_000.0; 6]),
    ("condo", "real-estate", "Condo", 5, [420_000.0; 6]),
    (
        "mortgage",
        "liabilities",
        "Mortgage",
        1,
        [2518447.0, 2515511.0, 2510758.0, 2509300.0, 2506085.0, 2502983.0],
    ),
    (
        "credit-card",
        "liabilities",
        "Credit Card",
        2,
        [2400.0, 32600.0, 9000.0, 19900.0, 19620.0, 17034.0],
    ),
    ("car-loan", "liabilities", "Car Loan", 3, [2384.0, 50100.0, 0.0, 0.0, 0.0, 0.0]),
    ("heloc", "liabilities", "HELOC", 4, [0.0, 0.0, 22800.0, 4136.0, 0.0, 0.0]),
];

/// Seed document anchored at today's month.
pub fn default_document() -> NetWorthData {
    default_document_for(&current_month())
}

/// Seed document anchored at `month`.
///
/// Example values always cover 2025-01..2025-06 regardless of `month`.
/// A malformed `month` falls back to today's month.
pub fn default_document_for(month: &str) -> NetWorthData {
    let (current_month, display_months) = match month_range(month, DISPLAY_MONTH_COUNT) {
        Ok(months) => (month.trim().to_string(), months),
        Err(_) => {
            let today = current_month();
            let months = month_range(&today, DISPLAY_MONTH_COUNT).unwrap_or_default();
            (today, months)
        }
    };

    let categories = SEED_CATEGORIES
        .iter()
        .map(|(id, name, kind, order)| Category::new(*id, *name, *kind, *order))
        .collect();

    let items = SEED_ITEMS
        .iter()
        .map(|(id, category_id, name, order, values)| {
            SEED_MONTHS
                .iter()
                .zip(values.iter())
                .fold(Item::new(*id, *category_id, *name, *order), |item, (m, v)| {
                    item.with_value(*m, *v)
                })
        })
        .collect();

    NetWorthData {
        categories,
        items,
        current_month,
        display_months,
    }
}

#[cfg(test)]
mod tests {
    use super::default_document_for;
    use crate::calc::net_worth;

    #[test]
    fn seed_has_expected_shape() {
        let data = default_document_for("2025-01");
        assert_eq!(data.categories.len(), 4);
        assert_eq!(data.items.len(), 16);
        assert_eq!(data.current_month, "2025-01");
        assert_eq!(data.display_months.len(), 6);
        assert_eq!(data.display_months[5], "2025-06");
        assert!(data
            .items
            .iter()
            .all(|item| data.has_category(&item.category_id)));
    }

    #[test]
    fn seed_net_worth_for_january() {
        let data = default_document_for("2025-01");
        // assets 4_270_066 (bank 14_500 + financial 425_566 + real estate 3_830_000)
        // minus liabilities 2_523_231.
        assert_eq!(
            net_worth("2025-01", &data.categories, &data.items),
            1_746_835.0
        );
    }
}
