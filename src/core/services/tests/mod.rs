mod analytics_service_tests;

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::{Category, Expense, ExpenseDraft, ExpenseId};

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(super) fn expense(
    id: &str,
    title: &str,
    amount: f64,
    category: Category,
    on: NaiveDate,
) -> Expense {
    Expense::with_id(
        ExpenseId::from(id),
        ExpenseDraft::new(title, amount, category, on),
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
    )
}

pub(super) fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
