//! CLI argument definitions for the MovieLens pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lens-cli",
    version,
    about = "MovieLens batch pipeline - extract, validate, and derive data products",
    long_about = "Extract MovieLens datasets from a zip archive, validate them against \
                  declarative YAML schemas plus per-dataset business rules, load them \
                  into a curated zone, and derive aggregate data products."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q to quiet).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline from a configuration file.
    Run(RunArgs),

    /// Validate a single dataset file against a schema without running
    /// the pipeline.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the pipeline configuration YAML.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Validate and report without writing any zone outputs.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Dataset file to validate (.dat or .csv).
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Schema file describing the dataset columns.
    #[arg(long = "schema", value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Validator role name (movie, user, rating). Unknown names run
    /// uniqueness checks only.
    #[arg(long = "validator", default_value = "")]
    pub validator: String,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
