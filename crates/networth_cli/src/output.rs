use networth_core::{format_currency, format_month, Category, CategoryType, NetWorthStore};
use std::fmt::Write;

pub fn summary_text(store: &NetWorthStore) -> String {
    let mut text = String::new();
    let _ = writeln!(
        text,
        "{:<10} {:>14} {:>14} {:>14} {:>12} {:>8}",
        "Month", "Assets", "Liabilities", "Net worth", "Change", "Rate"
    );
    for summary in store.monthly_summaries() {
        let _ = writeln!(
            text,
            "{:<10} {:>14} {:>14} {:>14} {:>12} {:>7.1}%",
            format_month(&summary.month),
            format_currency(summary.total_assets),
            format_currency(summary.total_liabilities),
            format_currency(summary.net_worth),
            format_currency(summary.change),
            summary.change_rate
        );
    }
    text
}

pub fn list_text(store: &NetWorthStore) -> String {
    let month = store.current_month();
    let grouped = store.items_by_category();
    let mut text = String::new();

    for kind in [CategoryType::Asset, CategoryType::Liability] {
        let mut categories: Vec<&Category> = store.categories_by_type(kind);
        categories.sort_by_key(|category| category.order);

        for category in categories {
            let _ = writeln!(
                text,
                "[{}] {} ({})",
                kind.as_str(),
                category.name,
                category.id
            );
            for item in grouped.get(category.id.as_str()).into_iter().flatten() {
                let _ = writeln!(
                    text,
                    "    {:<24} {:>14}  ({})",
                    item.name,
                    format_currency(item.value_for(month)),
                    item.id
                );
            }
        }
    }

    let _ = writeln!(text, "Values shown for {}.", format_month(month));
    text
}

#[cfg(test)]
mod tests {
    use super::{list_text, summary_text};
    use networth_core::{default_document_for, NetWorthStore};

    #[test]
    fn summary_has_header_and_one_row_per_month() {
        let store = NetWorthStore::new(default_document_for("2025-01"));
        let text = summary_text(&store);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Month"));
        assert!(lines[1].starts_with("Jan 2025"));
        assert!(lines[1].contains("$1,746,835"));
    }

    #[test]
    fn list_shows_items_under_their_category() {
        let store = NetWorthStore::new(default_document_for("2025-01"));
        let text = list_text(&store);

        let bank = text.find("[asset] Bank Account").unwrap();
        let checking = text.find("Checking").unwrap();
        let liabilities = text.find("[liability] Liabilities").unwrap();
        assert!(bank < checking && checking < liabilities);
        assert!(text.contains("$1,500"));
        assert!(text.ends_with("Values shown for Jan 2025.\n"));
    }
}
