pub mod json_backend;
pub mod memory;
pub mod seed;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{domain::Expense, errors::Result};

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;

/// Abstraction over persistence backends holding the whole expense collection.
/// The collection is always read and written as a unit.
pub trait StorageBackend: Send + Sync {
    /// Returns `None` when nothing has been stored yet.
    fn read(&self) -> Result<Option<Vec<Expense>>>;
    fn write(&self, expenses: &[Expense]) -> Result<()>;

    /// Human readable location, used in logs.
    fn describe(&self) -> String;
}

/// Load/save boundary consumed by the expense manager. Neither operation
/// surfaces errors: failures are logged and the caller keeps going.
pub struct ExpenseStore {
    backend: Box<dyn StorageBackend>,
}

impl ExpenseStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn StorageBackend {
        self.backend.as_ref()
    }

    /// Loads the stored collection. A first run stores and returns the seed
    /// set; unreadable data yields an empty collection.
    pub fn load(&self, today: NaiveDate, now: DateTime<Utc>) -> Vec<Expense> {
        match self.backend.read() {
            Ok(Some(expenses)) => {
                tracing::info!(
                    count = expenses.len(),
                    location = %self.backend.describe(),
                    "loaded expenses"
                );
                expenses
            }
            Ok(None) => {
                let seeded = seed::initial_expenses(today, now);
                tracing::info!(
                    count = seeded.len(),
                    location = %self.backend.describe(),
                    "no stored expenses, seeding defaults"
                );
                self.save(&seeded);
                seeded
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    location = %self.backend.describe(),
                    "failed to load expenses, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Writes the full collection. Returns `false` when the write failed.
    pub fn save(&self, expenses: &[Expense]) -> bool {
        match self.backend.write(expenses) {
            Ok(()) => {
                tracing::debug!(count = expenses.len(), "saved expenses");
                true
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    location = %self.backend.describe(),
                    "failed to save expenses"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Clock, FixedClock};
    use crate::errors::ExpenseError;

    struct BrokenStorage;

    impl StorageBackend for BrokenStorage {
        fn read(&self) -> Result<Option<Vec<Expense>>> {
            Err(ExpenseError::Serde("expected value at line 1".into()))
        }

        fn write(&self, _expenses: &[Expense]) -> Result<()> {
            Err(ExpenseError::Storage("quota exceeded".into()))
        }

        fn describe(&self) -> String {
            "broken".into()
        }
    }

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
    }

    #[test]
    fn first_load_seeds_and_persists() {
        let memory = MemoryStorage::default();
        let store = ExpenseStore::new(Box::new(memory.clone()));
        let loaded = store.load(clock().today(), clock().now());
        assert_eq!(loaded.len(), 5);
        assert_eq!(memory.snapshot(), Some(loaded));
    }

    #[test]
    fn read_failure_falls_back_to_empty() {
        let store = ExpenseStore::new(Box::new(BrokenStorage));
        assert!(store.load(clock().today(), clock().now()).is_empty());
    }

    #[test]
    fn write_failure_is_reported_not_raised() {
        let store = ExpenseStore::new(Box::new(BrokenStorage));
        assert!(!store.save(&[]));
    }
}
