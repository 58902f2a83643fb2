use std::path::PathBuf;
use thiserror::Error;

/// Every variant is fatal: the dashboard cannot start without its table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read sales data from '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: unparseable date '{value}'")]
    InvalidDate { line: u64, value: String },

    #[error("Line {line}: unparseable amount '{value}'")]
    InvalidAmount { line: u64, value: String },

    #[error("Line {line}: amount must not be negative, got '{value}'")]
    NegativeAmount { line: u64, value: String },

    #[error("Line {line}: quantity must be a non-negative integer, got '{value}'")]
    InvalidQuantity { line: u64, value: String },
}
