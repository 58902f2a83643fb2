use analytics::{AnalyticsEngine, DashboardViews, bucket_by_period, filter};
use chrono::NaiveDate;
use core_types::{Period, Table, Transaction};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

fn row(y: i32, m: u32, d: u32, category: &str, product: &str, amount: Decimal, quantity: u32) -> Transaction {
    Transaction {
        date: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        category: category.to_string(),
        product: product.to_string(),
        amount,
        quantity,
    }
}

fn categories(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn two_row_table() -> Table {
    Table::new(vec![
        row(2024, 1, 5, "A", "X", dec!(100), 2),
        row(2024, 2, 10, "B", "Y", dec!(50), 0),
    ])
}

fn kpi_values(views: &DashboardViews) -> Vec<(String, Decimal)> {
    views
        .kpi_table
        .rows
        .iter()
        .map(|r| (r.label.clone(), r.value))
        .collect()
}

#[test]
fn two_row_monthly_scenario() {
    let engine = AnalyticsEngine::default();
    let views = engine.compute_views(&two_row_table(), Period::Month, &categories(&["A", "B"]));

    let points: Vec<_> = views
        .time_series
        .points
        .iter()
        .map(|p| (p.bucket_start, p.amount))
        .collect();
    assert_eq!(
        points,
        vec![
            (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), dec!(100)),
            (NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), dec!(50)),
        ]
    );

    assert_eq!(
        kpi_values(&views),
        vec![
            ("Total revenue".to_string(), dec!(150)),
            ("Total costs".to_string(), dec!(70)),
            ("Profit".to_string(), dec!(80)),
        ]
    );

    let slices: Vec<_> = views
        .category_share
        .slices
        .iter()
        .map(|s| (s.category.as_str(), s.amount))
        .collect();
    assert_eq!(slices, vec![("A", dec!(100)), ("B", dec!(50))]);

    let bars: Vec<_> = views
        .product_distribution
        .bars
        .iter()
        .map(|b| (b.product.as_str(), b.amount))
        .collect();
    assert_eq!(bars, vec![("X", dec!(100)), ("Y", dec!(50))]);

    let scatter: Vec<_> = views.scatter.points.iter().map(|p| (p.quantity, p.amount)).collect();
    assert_eq!(scatter, vec![(2, dec!(100)), (0, dec!(50))]);
}

#[test]
fn empty_selection_produces_no_data_views() {
    let engine = AnalyticsEngine::default();
    let views = engine.compute_views(&two_row_table(), Period::Month, &HashSet::new());

    assert!(views.is_empty());
    assert_eq!(views.kpi_table.rows.len(), 3);
    assert!(views.kpi_table.rows.iter().all(|r| r.value == Decimal::ZERO));
}

#[test]
fn selection_matching_no_rows_behaves_like_empty_selection() {
    let engine = AnalyticsEngine::default();
    let base = two_row_table();
    let none = engine.compute_views(&base, Period::Day, &categories(&["Nope"]));
    let empty = engine.compute_views(&base, Period::Day, &HashSet::new());
    assert!(none.is_empty());
    assert_eq!(none, empty);
}

#[test]
fn identical_inputs_yield_identical_views() {
    let engine = AnalyticsEngine::default();
    let base = Table::new(vec![
        row(2023, 3, 1, "Goods", "Chair", dec!(120.40), 3),
        row(2023, 3, 9, "Services", "Repair", dec!(80), 1),
        row(2023, 6, 2, "Goods", "Table", dec!(300), 0),
        row(2024, 1, 15, "Services", "Delivery", dec!(15.5), 5),
    ]);
    let selection = categories(&["Goods", "Services"]);

    for period in Period::ALL {
        let first = engine.compute_views(&base, period, &selection);
        let second = engine.compute_views(&base, period, &selection);
        assert_eq!(first, second);
    }
}

#[test]
fn time_series_conserves_filtered_revenue() {
    let base = Table::new(vec![
        row(2023, 3, 1, "Goods", "Chair", dec!(120.40), 3),
        row(2023, 3, 9, "Services", "Repair", dec!(80), 1),
        row(2023, 6, 2, "Goods", "Table", dec!(300), 0),
        row(2024, 1, 15, "Services", "Delivery", dec!(15.5), 5),
    ]);
    for selection in [vec!["Goods"], vec!["Services"], vec!["Goods", "Services"]] {
        let filtered = filter(&base, &categories(&selection));
        let expected: Decimal = filtered.iter().map(|r| r.amount).sum();
        for period in Period::ALL {
            let total: Decimal = bucket_by_period(&filtered, period).iter().map(|b| b.amount).sum();
            assert_eq!(total, expected);
        }
    }
}

#[test]
fn views_serialize_to_json() {
    let engine = AnalyticsEngine::default();
    let views = engine.compute_views(&two_row_table(), Period::Year, &categories(&["A"]));
    let json = serde_json::to_value(&views).unwrap();
    assert_eq!(json["time_series"]["period"], "Y");
    assert_eq!(json["time_series"]["points"][0]["bucket_start"], "2024-01-01");
    assert_eq!(json["kpi_table"]["rows"][2]["label"], "Profit");
}
