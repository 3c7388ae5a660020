//! Expense records and the editable draft used to create or update them.

use std::fmt;

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::Category, common::*};
use crate::errors::{ExpenseError, Result};

/// Opaque expense identifier. New expenses get a UUID; older or seeded data may
/// carry arbitrary strings, which are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, enough to reference an expense from the shell.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExpenseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Builds a new expense from a draft, assigning a fresh id.
    pub fn new(draft: ExpenseDraft, created_at: DateTime<Utc>) -> Self {
        Self::with_id(ExpenseId::generate(), draft, created_at)
    }

    /// `created_at` is truncated to whole milliseconds, the stored precision.
    pub fn with_id(id: ExpenseId, draft: ExpenseDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            created_at: created_at.trunc_subsecs(3),
        }
    }

    /// Replaces every editable field. `id` and `created_at` are preserved.
    pub fn apply(&mut self, draft: ExpenseDraft) {
        self.title = draft.title;
        self.amount = draft.amount;
        self.category = draft.category;
        self.date = draft.date;
    }

    /// Returns the editable part of this expense, e.g. to prefill a form.
    pub fn draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            title: self.title.clone(),
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!(
            "{} ({}, {:.2}, {})",
            self.title, self.category, self.amount, self.date
        )
    }
}

/// User-editable expense fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category,
            date,
        }
    }

    /// Checks the required fields, returning a trimmed copy when valid.
    pub fn validate(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ExpenseError::Validation("title must not be empty".into()));
        }
        if !self.amount.is_finite() {
            return Err(ExpenseError::Validation("amount must be a number".into()));
        }
        if self.amount < 0.0 {
            return Err(ExpenseError::Validation(
                "amount must not be negative".into(),
            ));
        }
        Ok(Self { title, ..self })
    }
}

/// Parses a user supplied amount such as `12`, `12.50` or `$1,200.00`.
pub fn parse_amount(input: &str) -> Result<f64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_'))
        .collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| ExpenseError::Validation(format!("invalid amount `{}`", input.trim())))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!(
            "invalid date `{}` (expected YYYY-MM-DD)",
            input.trim()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn serializes_with_original_field_names() {
        let created = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let expense = Expense::with_id(
            ExpenseId::from("1"),
            ExpenseDraft::new("Grocery Shopping", 150.5, Category::Food, date(2024, 3, 9)),
            created,
        );
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["category"], "Food");
        assert_eq!(value["date"], "2024-03-09");
        assert_eq!(value["createdAt"], 1_700_000_000_123i64);
        let back: Expense = serde_json::from_value(value).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn apply_keeps_identity() {
        let mut expense = Expense::new(
            ExpenseDraft::new("Bus", 2.5, Category::Transport, date(2024, 1, 1)),
            Utc::now(),
        );
        let id = expense.id.clone();
        let created = expense.created_at;
        expense.apply(ExpenseDraft::new("Train", 9.0, Category::Other, date(2024, 1, 2)));
        assert_eq!(expense.id, id);
        assert_eq!(expense.created_at, created);
        assert_eq!(expense.title, "Train");
        assert_eq!(expense.category, Category::Other);
    }

    #[test]
    fn validation_rejects_missing_fields() {
        let today = date(2024, 1, 1);
        assert!(ExpenseDraft::new("  ", 1.0, Category::Food, today)
            .validate()
            .is_err());
        assert!(ExpenseDraft::new("Lunch", -0.01, Category::Food, today)
            .validate()
            .is_err());
        assert!(ExpenseDraft::new("Lunch", f64::NAN, Category::Food, today)
            .validate()
            .is_err());
        let ok = ExpenseDraft::new(" Lunch ", 0.0, Category::Food, today)
            .validate()
            .unwrap();
        assert_eq!(ok.title, "Lunch");
    }

    #[test]
    fn parses_amounts_and_dates() {
        assert_eq!(parse_amount("$1,200.00").unwrap(), 1200.0);
        assert_eq!(parse_amount("45").unwrap(), 45.0);
        assert!(parse_amount("abc").is_err());
        assert_eq!(parse_date("2026-10-17").unwrap(), date(2026, 10, 17));
        assert!(parse_date("17/10/2026").is_err());
    }

    #[test]
    fn short_id_truncates_uuids_only() {
        assert_eq!(ExpenseId::from("1").short(), "1");
        let id = ExpenseId::generate();
        assert_eq!(id.short().len(), 8);
        assert!(id.as_str().starts_with(id.short()));
    }
}
