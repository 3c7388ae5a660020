use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use super::StorageBackend;
use crate::{
    domain::Expense,
    errors::{ExpenseError, Result},
};

/// In-process backend. Clones share the same slot, so a test can keep a handle
/// and inspect what the manager persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<Vec<Expense>>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        let storage = Self::default();
        if let Ok(mut slot) = storage.slot.lock() {
            *slot = Some(expenses);
        }
        storage
    }

    /// Last persisted collection, if any.
    pub fn snapshot(&self) -> Option<Vec<Expense>> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    /// Makes subsequent writes fail, simulating an unavailable store.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Result<Option<Vec<Expense>>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| ExpenseError::Storage("memory store poisoned".into()))?;
        Ok(slot.clone())
    }

    fn write(&self, expenses: &[Expense]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ExpenseError::Storage("memory store rejected write".into()));
        }
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| ExpenseError::Storage("memory store poisoned".into()))?;
        *slot = Some(expenses.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
