use std::str::FromStr;

use chrono::{Duration, NaiveDate};

use super::summary_service::same_month;
use crate::domain::{Category, Expense};
use crate::errors::ExpenseError;

/// Restricts the list view to a window relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    #[default]
    All,
    /// Dates in the current calendar month.
    Month,
    /// Dates in the seven days ending today, inclusive.
    Week,
}

impl PeriodFilter {
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            PeriodFilter::All => true,
            PeriodFilter::Month => same_month(date, today),
            PeriodFilter::Week => date <= today && date > today - Duration::days(7),
        }
    }
}

impl FromStr for PeriodFilter {
    type Err = ExpenseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PeriodFilter::All),
            "month" => Ok(PeriodFilter::Month),
            "week" => Ok(PeriodFilter::Week),
            other => Err(ExpenseError::Validation(format!(
                "unknown period `{other}` (expected all, month or week)"
            ))),
        }
    }
}

/// List view criteria. All set predicates must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring matched against the title.
    pub search: String,
    /// `None` means all categories.
    pub category: Option<Category>,
    pub period: PeriodFilter,
}

impl ExpenseFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn period(mut self, period: PeriodFilter) -> Self {
        self.period = period;
        self
    }

    pub fn matches(&self, expense: &Expense, today: NaiveDate) -> bool {
        let title_matches = self.search.is_empty()
            || expense
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        title_matches
            && self.category.map_or(true, |c| expense.category == c)
            && self.period.contains(expense.date, today)
    }
}

pub struct FilterService;

impl FilterService {
    /// Returns matching expenses, most recent date first. Expenses sharing a
    /// date keep their collection order.
    pub fn apply<'a>(
        expenses: &'a [Expense],
        filter: &ExpenseFilter,
        today: NaiveDate,
    ) -> Vec<&'a Expense> {
        let mut matched: Vec<&Expense> = expenses
            .iter()
            .filter(|expense| filter.matches(expense, today))
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }
}

/// Parses a category filter where `All` (any case) means no restriction.
pub fn parse_category_filter(value: &str) -> Result<Option<Category>, ExpenseError> {
    if value.trim().eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}
