//! Pure derivations over the expense collection. Every function recomputes from
//! scratch; callers invoke them after each mutation.

pub mod analytics_service;
pub mod filter_service;
pub mod summary_service;

pub use analytics_service::{AnalyticsService, CategoryTotal, MonthlyTotal, TREND_MONTHS};
pub use filter_service::{parse_category_filter, ExpenseFilter, FilterService, PeriodFilter};
pub use summary_service::{ExpenseSummary, HighestCategory, SummaryService};

#[cfg(test)]
mod tests;
