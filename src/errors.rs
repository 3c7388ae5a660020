use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for domain, storage and configuration failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Expense not found: {0}")]
    NotFound(String),
    #[error("Reference `{0}` matches more than one expense")]
    AmbiguousReference(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, ExpenseError>;

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        ExpenseError::Serde(err.to_string())
    }
}

/// Errors that terminate the CLI shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_storage() {
        let err: ExpenseError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, ExpenseError::Storage(ref msg) if msg.contains("disk full")));
    }

    #[test]
    fn serde_errors_map_to_serde() {
        let err: ExpenseError = serde_json::from_str::<Vec<u8>>("not json")
            .expect_err("invalid json")
            .into();
        assert!(matches!(err, ExpenseError::Serde(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
