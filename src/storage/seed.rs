//! Default expenses written on first run.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::domain::{Category, Expense, ExpenseDraft, ExpenseId};

/// Five sample expenses spread over the last few days, ids `"1"` to `"5"`.
pub fn initial_expenses(today: NaiveDate, now: DateTime<Utc>) -> Vec<Expense> {
    let rows = [
        ("Grocery Shopping", 150.50, Category::Food, 0),
        ("Monthly Rent", 1200.00, Category::Rent, 0),
        ("Gas Station", 45.00, Category::Transport, 1),
        ("Internet Bill", 60.00, Category::Bills, 2),
        ("New Sneakers", 89.99, Category::Shopping, 5),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(idx, (title, amount, category, days_ago))| {
            Expense::with_id(
                ExpenseId::from((idx + 1).to_string()),
                ExpenseDraft::new(title, amount, category, today - Duration::days(days_ago)),
                now - Duration::seconds(idx as i64),
            )
        })
        .collect()
}
