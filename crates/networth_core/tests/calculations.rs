use networth_core::{
    category_total, change_rate, default_document_for, monthly_change, monthly_summaries,
    net_worth, total_assets, total_liabilities, Category, CategoryType, Item,
};

fn scenario() -> (Vec<Category>, Vec<Item>) {
    let categories = vec![
        Category::new("a", "Assets", CategoryType::Asset, 1),
        Category::new("l", "Liabilities", CategoryType::Liability, 1),
    ];
    let items = vec![
        Item::new("i1", "a", "Checking", 1).with_value("2025-01", 100.0),
        Item::new("i2", "l", "Card", 1).with_value("2025-01", 40.0),
    ];
    (categories, items)
}

#[test]
fn example_scenario_net_worth() {
    let (categories, items) = scenario();
    assert_eq!(net_worth("2025-01", &categories, &items), 60.0);
    assert_eq!(net_worth("2025-02", &categories, &items), 0.0);
}

#[test]
fn net_worth_identity_holds_for_seed_months() {
    let data = default_document_for("2025-01");
    for month in ["2024-12", "2025-01", "2025-03", "2025-06", "2025-07"] {
        let assets = total_assets(month, &data.categories, &data.items);
        let liabilities = total_liabilities(month, &data.categories, &data.items);
        assert_eq!(
            net_worth(month, &data.categories, &data.items),
            assets - liabilities
        );
    }
}

#[test]
fn category_total_only_counts_matching_items() {
    let data = default_document_for("2025-01");
    assert_eq!(category_total("bank-account", "2025-01", &data.items), 14_500.0);
    assert_eq!(category_total("liabilities", "2025-03", &data.items), 2_542_558.0);
    assert_eq!(category_total("unknown", "2025-01", &data.items), 0.0);
}

#[test]
fn change_and_rate_between_months() {
    let (categories, items) = scenario();
    assert_eq!(monthly_change("2025-02", "2025-01", &categories, &items), -60.0);
    assert_eq!(change_rate("2025-02", "2025-01", &categories, &items), -100.0);
    // Previous month is zero: rate is reported as zero whatever the move.
    assert_eq!(monthly_change("2025-01", "2024-12", &categories, &items), 60.0);
    assert_eq!(change_rate("2025-01", "2024-12", &categories, &items), 0.0);
}

#[test]
fn summaries_ignore_data_before_the_window() {
    let (categories, items) = scenario();
    let months = vec!["2025-02".to_string(), "2025-03".to_string()];
    let summaries = monthly_summaries(&months, &categories, &items);

    assert_eq!(summaries[0].month, "2025-02");
    assert_eq!(summaries[0].change, 0.0);
    assert_eq!(summaries[0].change_rate, 0.0);
    assert_eq!(summaries[1].net_worth, 0.0);
}

#[test]
fn summaries_serialize_with_camel_case_fields() {
    let (categories, items) = scenario();
    let summaries = monthly_summaries(&["2025-01".to_string()], &categories, &items);
    let json = serde_json::to_value(&summaries[0]).unwrap();

    assert_eq!(json["month"], "2025-01");
    assert_eq!(json["totalAssets"], 100.0);
    assert_eq!(json["totalLiabilities"], 40.0);
    assert_eq!(json["netWorth"], 60.0);
    assert_eq!(json["changeRate"], 0.0);
}
