use expense_tracker::{
    core::{ExpenseManager, FixedClock},
    domain::{Category, ExpenseDraft},
    init,
    storage::MemoryStorage,
};
use chrono::NaiveDate;

#[test]
fn tracker_smoke() {
    init();

    let today = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    let storage = MemoryStorage::with_expenses(Vec::new());
    let mut manager = ExpenseManager::open(Box::new(storage.clone()), Box::new(FixedClock::on(today)));

    let id = manager
        .add(ExpenseDraft::new("Lunch", 14.2, Category::Food, today))
        .unwrap()
        .id
        .clone();
    assert_eq!(manager.summary().daily_total, 14.2);
    manager.delete(&id).unwrap();
    assert!(manager.expenses().is_empty());
    assert_eq!(storage.snapshot().unwrap().len(), 0);
}
