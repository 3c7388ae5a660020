#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use expense_tracker::{
    config::ConfigManager,
    core::{Clock, ExpenseManager, FixedClock},
    domain::{Category, Expense, ExpenseDraft, ExpenseId},
    storage::JsonStorage,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn today() -> NaiveDate {
    date(2026, 10, 17)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Fresh data directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates isolated managers backed by a unique directory, pinned to `today()`.
pub fn setup_test_env() -> (ExpenseManager, ConfigManager, PathBuf) {
    let base = temp_base();
    let manager = open_at(&base);
    let config_manager = ConfigManager::with_base_dir(base.clone());
    (manager, config_manager, base)
}

/// Reopens the JSON store under `base`, as a restarted process would.
pub fn open_at(base: &Path) -> ExpenseManager {
    let storage = JsonStorage::new(Some(base.to_path_buf()));
    ExpenseManager::open(Box::new(storage), Box::new(FixedClock::on(today())))
}

pub fn expense(id: &str, title: &str, amount: f64, category: Category, on: NaiveDate) -> Expense {
    Expense::with_id(
        ExpenseId::from(id),
        ExpenseDraft::new(title, amount, category, on),
        FixedClock::on(on).now(),
    )
}
