use super::{approx, date, expense};
use crate::core::services::{AnalyticsService, TREND_MONTHS};
use crate::domain::Category;

#[test]
fn category_breakdown_sorts_descending_and_omits_absent() {
    let expenses = vec![
        expense("a", "Lunch", 12.0, Category::Food, date(2024, 1, 1)),
        expense("b", "Rent", 900.0, Category::Rent, date(2024, 1, 1)),
        expense("c", "Dinner", 30.0, Category::Food, date(2024, 1, 2)),
    ];
    let breakdown = AnalyticsService::category_breakdown(&expenses);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].category, Category::Rent);
    assert_eq!(breakdown[1].category, Category::Food);
    assert!(approx(breakdown[1].amount, 42.0));
    assert_eq!(breakdown[1].color, "#10b981");
    assert!(breakdown
        .iter()
        .all(|row| expenses.iter().any(|e| e.category == row.category)));
}

#[test]
fn category_breakdown_of_empty_is_empty() {
    assert!(AnalyticsService::category_breakdown(&[]).is_empty());
    assert!(AnalyticsService::monthly_trend(&[]).is_empty());
}

#[test]
fn monthly_trend_keeps_latest_six_months_in_order() {
    let mut expenses = Vec::new();
    for (idx, month) in (1..=8).rev().enumerate() {
        expenses.push(expense(
            &format!("m{idx}"),
            "Item",
            month as f64,
            Category::Other,
            date(2024, month, 15),
        ));
    }
    expenses.push(expense("dec", "Gift", 100.0, Category::Shopping, date(2023, 12, 24)));

    let trend = AnalyticsService::monthly_trend(&expenses);
    assert_eq!(trend.len(), TREND_MONTHS);
    let keys: Vec<_> = trend.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(
        keys,
        ["2024-03", "2024-04", "2024-05", "2024-06", "2024-07", "2024-08"]
    );
    assert_eq!(trend[0].label, "Mar");
    assert_eq!(trend[5].label, "Aug");
    assert!(approx(trend[5].amount, 8.0));
}

#[test]
fn monthly_trend_leaves_gaps_unfilled() {
    let expenses = vec![
        expense("a", "Jan", 10.0, Category::Food, date(2024, 1, 5)),
        expense("b", "Jan again", 5.0, Category::Food, date(2024, 1, 20)),
        expense("c", "Apr", 7.0, Category::Food, date(2024, 4, 1)),
    ];
    let trend = AnalyticsService::monthly_trend(&expenses);
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].key, "2024-01");
    assert!(approx(trend[0].amount, 15.0));
    assert_eq!(trend[1].label, "Apr");
}
