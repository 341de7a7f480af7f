//! Delimited file loading into typed polars frames.
//!
//! The delimiter is inferred from the file extension: MovieLens `.dat`
//! files are double-colon separated with no header row, `.csv` files are
//! comma separated with a header row that is replaced by the schema's
//! column names. Input bytes are tolerated as Latin-1 since the MovieLens
//! titles are not valid UTF-8.

use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use lens_model::{ColumnType, DatasetSchema, LensError, Result};

use crate::values::{parse_f64, parse_i64};

/// Load a raw dataset file into a `DataFrame` typed per the schema.
///
/// Column names come from the schema in order; integer and float columns
/// hold nulls where a value does not parse.
pub fn read_dataset_frame(path: &Path, schema: &DatasetSchema) -> Result<DataFrame> {
    let bytes = std::fs::read(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            LensError::NotFound(format!("dataset file not found: {}", path.display()))
        } else {
            LensError::Io(error)
        }
    })?;
    let text = decode_latin1(&bytes);

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let rows = match extension {
        "dat" => parse_double_colon(&text),
        "csv" => parse_csv(path, &text)?,
        other => {
            return Err(LensError::DatasetRead {
                path: path.to_path_buf(),
                message: format!("unsupported file extension '{other}'"),
            });
        }
    };

    let frame = build_frame(path, schema, &rows)?;
    debug!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "dataset frame loaded"
    );
    Ok(frame)
}

/// Decode bytes as UTF-8 where possible, falling back to Latin-1.
fn decode_latin1(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn parse_double_colon(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split("::").map(str::to_string).collect())
        .collect()
}

fn parse_csv(path: &Path, text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| LensError::DatasetRead {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn build_frame(path: &Path, schema: &DatasetSchema, rows: &[Vec<String>]) -> Result<DataFrame> {
    let width = schema.columns.len();
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(LensError::DatasetRead {
                path: path.to_path_buf(),
                message: format!(
                    "row {} has {} fields, schema declares {width}",
                    idx + 1,
                    row.len()
                ),
            });
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(width);
    for (col_idx, column) in schema.columns.iter().enumerate() {
        let name = column.name.as_str();
        match column.column_type {
            ColumnType::Integer => {
                let values: Vec<Option<i64>> =
                    rows.iter().map(|row| parse_i64(&row[col_idx])).collect();
                columns.push(Series::new(name.into(), values).into());
            }
            ColumnType::Float => {
                let values: Vec<Option<f64>> =
                    rows.iter().map(|row| parse_f64(&row[col_idx])).collect();
                columns.push(Series::new(name.into(), values).into());
            }
            ColumnType::String | ColumnType::Categorical => {
                let values: Vec<Option<String>> = rows
                    .iter()
                    .map(|row| {
                        let value = row[col_idx].trim();
                        if value.is_empty() {
                            None
                        } else {
                            Some(value.to_string())
                        }
                    })
                    .collect();
                columns.push(Series::new(name.into(), values).into());
            }
        }
    }

    Ok(DataFrame::new(columns)?)
}
