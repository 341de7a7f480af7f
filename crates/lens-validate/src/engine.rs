//! Schema-driven validation engine.
//!
//! Reads a dataset schema, runs the uniqueness pass over every enabled
//! unique-checked column, then the custom-predicate pass over every enabled
//! custom-checked column, and merges both into one ordered report.

use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use tracing::{debug, warn};

use lens_ingest::{any_to_string, load_dataset_schema};
use lens_model::{ColumnSchema, LensError, Result, ValidationReport};

use crate::registry::DatasetValidator;

/// Validate a loaded dataset against its schema.
///
/// The report maps column name to pass/fail, unique-checked columns first,
/// then custom-checked columns, each group in schema order. An unknown
/// `validator_name` skips the custom pass entirely; the uniqueness pass
/// still runs. An empty report means no checks were configured.
pub fn validate_dataset(
    validator_name: &str,
    df: &DataFrame,
    schema_path: &Path,
) -> Result<ValidationReport> {
    let schema = load_dataset_schema(schema_path)?;
    let validator = DatasetValidator::resolve(validator_name);
    let mut report = ValidationReport::new(validator_name);

    for column in schema.unique_check_columns() {
        let passed = check_unique(validator_name, df, column)?;
        report.record(&column.name, passed);
    }

    if validator.is_disabled() {
        debug!(
            validator = %validator_name,
            "no validator registered, skipping custom checks"
        );
        return Ok(report);
    }

    for column in schema.custom_check_columns() {
        let passed = check_custom(validator_name, validator, df, column)?;
        report.record(&column.name, passed);
    }

    Ok(report)
}

/// A column passes the uniqueness check when its distinct-value count
/// (nulls counting as a value like any other) equals the row count.
fn check_unique(dataset: &str, df: &DataFrame, column: &ColumnSchema) -> Result<bool> {
    let series = df
        .column(&column.name)
        .map_err(|_| LensError::MissingColumn {
            dataset: dataset.to_string(),
            column: column.name.clone(),
        })?
        .as_materialized_series();

    let distinct = series.n_unique()?;
    let total = series.len();
    let passed = distinct == total;
    if !passed {
        warn!(
            column = %column.name,
            dataset = %dataset,
            distinct,
            total,
            "uniqueness check failed"
        );
    }
    Ok(passed)
}

/// A column passes its custom check when the validator's predicate holds
/// for every value. A missing predicate for a custom-checked column is a
/// fatal lookup error, not a data failure.
fn check_custom(
    dataset: &str,
    validator: DatasetValidator,
    df: &DataFrame,
    column: &ColumnSchema,
) -> Result<bool> {
    let predicate =
        validator
            .predicate(&column.name)
            .ok_or_else(|| LensError::ValidatorLookup {
                validator: dataset.to_string(),
                column: column.name.clone(),
            })?;

    let series = df
        .column(&column.name)
        .map_err(|_| LensError::MissingColumn {
            dataset: dataset.to_string(),
            column: column.name.clone(),
        })?;

    let mut invalid = 0u64;
    for idx in 0..series.len() {
        let value = any_to_string(series.get(idx).unwrap_or(AnyValue::Null));
        if !predicate(&value) {
            invalid += 1;
        }
    }

    let passed = invalid == 0;
    if !passed {
        warn!(
            column = %column.name,
            dataset = %dataset,
            invalid,
            total = series.len(),
            "custom check failed"
        );
    }
    Ok(passed)
}
