use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::{Category, Expense};

/// Number of month buckets kept by [`AnalyticsService::monthly_trend`].
pub const TREND_MONTHS: usize = 6;

/// One slice of the category proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
    pub color: &'static str,
}

/// One bar of the monthly trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// Calendar month as `YYYY-MM`.
    pub key: String,
    /// Calendar month, 1-based.
    pub month: u32,
    /// English short month name, e.g. `Oct`.
    pub label: String,
    pub amount: f64,
}

pub struct AnalyticsService;

impl AnalyticsService {
    /// Per-category sums, largest first. Only categories present in the input
    /// appear; equal sums keep first-seen order.
    pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for expense in expenses {
            match totals
                .iter_mut()
                .find(|entry| entry.category == expense.category)
            {
                Some(entry) => entry.amount += expense.amount,
                None => totals.push(CategoryTotal {
                    category: expense.category,
                    amount: expense.amount,
                    color: expense.category.color_hex(),
                }),
            }
        }
        totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        totals
    }

    /// Per-month sums in calendar order, limited to the most recent
    /// [`TREND_MONTHS`] months that have data. Empty months are not filled in.
    pub fn monthly_trend(expenses: &[Expense]) -> Vec<MonthlyTotal> {
        let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        for expense in expenses {
            *buckets
                .entry((expense.date.year(), expense.date.month()))
                .or_insert(0.0) += expense.amount;
        }

        let skip = buckets.len().saturating_sub(TREND_MONTHS);
        buckets
            .into_iter()
            .skip(skip)
            .map(|((year, month), amount)| MonthlyTotal {
                key: format!("{year:04}-{month:02}"),
                month,
                label: month_label(year, month),
                amount,
            })
            .collect()
    }
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%b").to_string())
        .unwrap_or_default()
}
