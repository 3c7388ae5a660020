mod common;

use expense_tracker::{
    core::services::{ExpenseFilter, PeriodFilter},
    domain::{Category, ExpenseDraft},
};

use common::{date, setup_test_env, today};

#[test]
fn seeded_views_match_expected_figures() {
    let (manager, _config, _base) = setup_test_env();

    let summary = manager.summary();
    assert!((summary.total - 1545.49).abs() < 1e-9);
    assert!((summary.monthly_total - 1545.49).abs() < 1e-9);
    assert!((summary.daily_total - 1350.50).abs() < 1e-9);
    assert_eq!(summary.highest_category.category, Some(Category::Rent));
    assert_eq!(summary.highest_category.amount, 1200.0);

    let breakdown: Vec<Category> = manager
        .category_breakdown()
        .into_iter()
        .map(|row| row.category)
        .collect();
    assert_eq!(
        breakdown,
        vec![
            Category::Rent,
            Category::Food,
            Category::Shopping,
            Category::Bills,
            Category::Transport
        ]
    );

    let trend = manager.monthly_trend();
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].key, "2026-10");
    assert_eq!(trend[0].label, "Oct");
}

#[test]
fn views_follow_mutations() {
    let (mut manager, _config, _base) = setup_test_env();
    manager
        .add(ExpenseDraft::new("Tuition", 2000.0, Category::Education, date(2026, 5, 3)))
        .unwrap();

    let summary = manager.summary();
    assert_eq!(summary.highest_category.category, Some(Category::Education));
    assert!((summary.monthly_total - 1545.49).abs() < 1e-9);

    let keys: Vec<String> = manager.monthly_trend().into_iter().map(|m| m.key).collect();
    assert_eq!(keys, vec!["2026-05", "2026-10"]);

    let week = manager.filtered(&ExpenseFilter::default().period(PeriodFilter::Week));
    assert_eq!(week.len(), 5);
    let education =
        manager.filtered(&ExpenseFilter::default().category(Some(Category::Education)));
    assert_eq!(education.len(), 1);
    assert_eq!(education[0].date, date(2026, 5, 3));
    assert!(manager
        .filtered(&ExpenseFilter::default().search("TUITION"))
        .iter()
        .all(|e| e.date < today()));
}
