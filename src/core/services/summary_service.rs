use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::domain::{Category, Expense};

/// Category with the largest aggregate spend. `category` is `None` when no
/// category has a positive total.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HighestCategory {
    pub category: Option<Category>,
    pub amount: f64,
}

impl HighestCategory {
    pub fn label(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("None")
    }
}

impl fmt::Display for HighestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline figures derived from the full collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSummary {
    pub total: f64,
    pub monthly_total: f64,
    pub daily_total: f64,
    pub highest_category: HighestCategory,
}

pub struct SummaryService;

impl SummaryService {
    /// Computes totals relative to `today`.
    ///
    /// Category sums are kept in first-seen order and the highest is picked
    /// with a strict comparison, so on a tie the category that appeared first
    /// in the collection wins.
    pub fn summarize(expenses: &[Expense], today: NaiveDate) -> ExpenseSummary {
        let mut summary = ExpenseSummary::default();
        let mut per_category: Vec<(Category, f64)> = Vec::new();

        for expense in expenses {
            summary.total += expense.amount;
            if same_month(expense.date, today) {
                summary.monthly_total += expense.amount;
            }
            if expense.date == today {
                summary.daily_total += expense.amount;
            }
            match per_category
                .iter_mut()
                .find(|(category, _)| *category == expense.category)
            {
                Some((_, sum)) => *sum += expense.amount,
                None => per_category.push((expense.category, expense.amount)),
            }
        }

        for (category, amount) in per_category {
            if amount > summary.highest_category.amount {
                summary.highest_category = HighestCategory {
                    category: Some(category),
                    amount,
                };
            }
        }

        summary
    }
}

pub(crate) fn same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}
