use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::ExpenseError;

const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Fixed storage key; the whole expense collection lives under this name.
pub const STORAGE_KEY: &str = "expense_tracker_data_v1";

/// Resolves the on-disk locations used by the application.
pub struct PathResolver;

impl PathResolver {
    /// Application data directory: `$EXPENSE_TRACKER_HOME`, or
    /// `~/.expense_tracker`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_base(custom: Option<PathBuf>) -> PathBuf {
        custom.unwrap_or_else(Self::base_dir)
    }

    pub fn data_file_in(base: &Path) -> PathBuf {
        base.join(format!("{STORAGE_KEY}.json"))
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<(), ExpenseError> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Sibling path used to stage a write before renaming it into place.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.tmp"),
        None => "tmp".to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to a staging file and renames it over `path`.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), ExpenseError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_file_uses_storage_key() {
        let path = PathResolver::data_file_in(Path::new("/tmp/base"));
        assert_eq!(path, PathBuf::from("/tmp/base/expense_tracker_data_v1.json"));
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("a/data.json")),
            PathBuf::from("a/data.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("a/data")), PathBuf::from("a/data.tmp"));
    }

    #[test]
    fn write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("file.json");
        write_atomic(&path, "[1]").unwrap();
        write_atomic(&path, "[2]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[2]");
        assert!(!tmp_path(&path).exists());
    }
}
