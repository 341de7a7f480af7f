//! Subcommand entry points.

use anyhow::Result;

use lens_cli::config::load_config;
use lens_cli::pipeline::{PipelineRunner, PipelineSummary};
use lens_ingest::{load_dataset_schema, read_dataset_frame};
use lens_validate::{enforce_quality_gate, validate_dataset};

use crate::cli::{RunArgs, ValidateArgs};

/// Run the full pipeline from a config file.
pub fn run_pipeline(args: &RunArgs) -> Result<PipelineSummary> {
    let config = load_config(&args.config)?;
    let runner = PipelineRunner::new(config, args.dry_run);
    runner.run()
}

/// Validate one dataset file and print the per-column outcomes.
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let schema = load_dataset_schema(&args.schema)?;
    let frame = read_dataset_frame(&args.data_file, &schema)?;
    let report = validate_dataset(&args.validator, &frame, &args.schema)?;

    if report.is_empty() {
        println!("no checks configured");
    } else {
        for outcome in &report.outcomes {
            let status = if outcome.passed { "pass" } else { "FAIL" };
            println!("{}: {status}", outcome.column);
        }
    }
    enforce_quality_gate(&args.data_file.display().to_string(), &report)?;
    Ok(())
}
