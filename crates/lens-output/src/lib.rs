//! Zone persistence.
//!
//! Writes frames to the curated and data-product zones as comma-delimited
//! text with two-decimal float formatting, and a JSON summary of every
//! validation report produced during a run.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::Utc;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::Serialize;
use tracing::debug;

use lens_model::{Result, ValidationReport};

/// Write a frame as `<target_dir>/<file_name>.csv` with a header row and
/// floats rendered to two decimals.
pub fn write_frame_csv(df: &DataFrame, target_dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(target_dir)?;
    let path = target_dir.join(format!("{file_name}.csv"));
    let mut file = File::create(&path)?;
    let mut out = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_float_precision(Some(2))
        .finish(&mut out)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        "frame persisted"
    );
    Ok(path)
}

#[derive(Debug, Serialize)]
struct ValidationReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    reports: &'a [ValidationReport],
}

const REPORT_SCHEMA: &str = "lens-pipeline.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Write the run's validation reports as `validation_report.json` in the
/// output directory.
pub fn write_validation_report_json(
    output_dir: &Path,
    reports: &[ValidationReport],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join("validation_report.json");
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        reports,
    };
    let json = serde_json::to_string_pretty(&payload)
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    std::fs::write(&path, format!("{json}\n"))?;
    Ok(path)
}
