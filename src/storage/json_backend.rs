use std::{
    fs,
    path::{Path, PathBuf},
};

use super::StorageBackend;
use crate::{
    core::utils::{write_atomic, PathResolver},
    domain::Expense,
    errors::Result,
};

/// Stores the expense collection as a single pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    data_file: PathBuf,
}

impl JsonStorage {
    /// Points at the data file under `root`, or the default data directory.
    /// Nothing is created until the first write.
    pub fn new(root: Option<PathBuf>) -> Self {
        let root = PathResolver::resolve_base(root);
        Self {
            data_file: PathResolver::data_file_in(&root),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl StorageBackend for JsonStorage {
    fn read(&self) -> Result<Option<Vec<Expense>>> {
        if !self.data_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.data_file)?;
        if data.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn write(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string_pretty(expenses)?;
        write_atomic(&self.data_file, &json)
    }

    fn describe(&self) -> String {
        self.data_file.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::initial_expenses;
    use chrono::{NaiveDate, Utc};
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf()));
        (storage, temp)
    }

    #[test]
    fn missing_file_reads_as_none() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.read().expect("read").is_none());
        assert!(storage
            .data_file()
            .ends_with("expense_tracker_data_v1.json"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let expenses = initial_expenses(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(), Utc::now());
        storage.write(&expenses).expect("write");
        let loaded = storage.read().expect("read").expect("stored");
        assert_eq!(loaded, expenses);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.data_file(), "{not json").unwrap();
        assert!(storage.read().is_err());
    }

    #[test]
    fn unusable_root_fails_on_write_only() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let storage = JsonStorage::new(Some(blocker.join("home")));
        assert!(storage.read().expect("read").is_none());
        assert!(storage.write(&[]).is_err());
        assert!(blocker.is_file());
    }
}
