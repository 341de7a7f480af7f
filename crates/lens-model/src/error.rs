use std::path::PathBuf;

use thiserror::Error;

use crate::report::ValidationReport;

#[derive(Debug, Error)]
pub enum LensError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),

    /// Schema file missing, unreadable, or malformed.
    #[error("schema {}: {message}", path.display())]
    SchemaParse { path: PathBuf, message: String },

    /// Raw dataset file could not be turned into a frame.
    #[error("dataset {}: {message}", path.display())]
    DatasetRead { path: PathBuf, message: String },

    /// A check is configured for a column the loaded table does not have.
    /// This is a configuration error, not a validation failure.
    #[error("column {column} checked by schema but not present in dataset {dataset}")]
    MissingColumn { dataset: String, column: String },

    /// A custom check is configured but the resolved validator exposes no
    /// predicate for the column.
    #[error("validator {validator} has no predicate for column {column}")]
    ValidatorLookup { validator: String, column: String },

    /// One or more columns failed validation; carries the full per-column
    /// result mapping for diagnostics.
    #[error("dataset {dataset} failed data quality checks: {report}")]
    DataQuality {
        dataset: String,
        report: ValidationReport,
    },

    /// Archive extraction matched more than one entry.
    #[error("multiple archive entries match {name}: {}", entries.join(", "))]
    MultiMatch { name: String, entries: Vec<String> },

    /// Archive could not be opened or read.
    #[error("archive {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// Archive extraction matched zero entries, or a required file is absent.
    #[error("{0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, LensError>;
