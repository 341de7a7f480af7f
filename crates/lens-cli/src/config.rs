//! Pipeline configuration.
//!
//! A single YAML file describes the zone layout, which datasets to pull
//! from the source archive (and which validator each one uses), and the
//! two derived data products.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub paths: ZonePaths,
    /// Source datasets extracted from the archive into the raw zone.
    pub sources: Vec<SourceDataset>,
    pub data_products: DataProducts,
}

/// Storage zones and fixed input locations.
#[derive(Debug, Clone, Deserialize)]
pub struct ZonePaths {
    /// Source zip archive holding the raw `.dat` files.
    pub archive: PathBuf,
    pub raw_zone: PathBuf,
    pub curated_zone: PathBuf,
    pub data_product_zone: PathBuf,
    /// Directory of `<dataset-base-name>.yml` schema files.
    pub schema_dir: PathBuf,
}

/// One source dataset: the archive entry name and the validator that
/// covers its custom checks.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceDataset {
    /// Dataset file name inside the archive, e.g. `movies.dat`.
    pub file: String,
    /// Validator role name, e.g. `movie`. Unknown names disable custom
    /// checks for the dataset.
    pub validator: String,
}

impl SourceDataset {
    /// File name without extension; names the curated output and the
    /// schema file.
    pub fn base_name(&self) -> &str {
        self.file
            .rsplit_once('.')
            .map_or(self.file.as_str(), |(stem, _ext)| stem)
    }
}

/// Derived data product configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataProducts {
    pub movie_rating_stats: DataProduct,
    pub top_movies_per_user: TopMoviesProduct,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataProduct {
    /// Output file base name, also the dataset name in diagnostics.
    pub file_name: String,
    /// Schema file name under the schema directory.
    pub schema_file: String,
    pub validator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopMoviesProduct {
    #[serde(flatten)]
    pub product: DataProduct,
    /// How many rated movies to keep per user.
    #[serde(default = "default_per_user")]
    pub per_user: usize,
}

fn default_per_user() -> usize {
    3
}

/// Load the pipeline configuration from a YAML file.
pub fn load_config(path: &Path) -> anyhow::Result<PipelineConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: PipelineConfig = serde_yaml::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(config)
}
