//! Pipeline orchestration with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Prepare**: create the raw/curated/data-product zone directories
//! 2. **Extract**: pull raw `.dat` files out of the source archive
//! 3. **Curate**: load, validate, and persist each source dataset
//! 4. **Derive**: build the data products, validate, and persist them
//!
//! Every validation report acts as a gate: a failed column aborts the
//! stage before anything is written to the next zone.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use lens_ingest::{extract_dataset, load_dataset_schema, read_dataset_frame, schema_path_for};
use lens_model::ValidationReport;
use lens_output::{write_frame_csv, write_validation_report_json};
use lens_transform::{movie_rating_stats, top_movies_per_user};
use lens_validate::{enforce_quality_gate, validate_dataset};

use crate::config::{DataProduct, PipelineConfig, SourceDataset};

/// Curated datasets the data products combine.
const MOVIES_DATASET: &str = "movies";
const RATINGS_DATASET: &str = "ratings";

/// What a pipeline run produced.
#[derive(Debug, Default)]
pub struct PipelineSummary {
    /// Base names of datasets persisted to the curated zone.
    pub curated: Vec<String>,
    /// File names of derived data products.
    pub data_products: Vec<String>,
    /// Every validation report produced during the run.
    pub reports: Vec<ValidationReport>,
    /// Path of the written validation report JSON, unless dry-run.
    pub report_path: Option<PathBuf>,
}

pub struct PipelineRunner {
    config: PipelineConfig,
    dry_run: bool,
}

impl PipelineRunner {
    pub fn new(config: PipelineConfig, dry_run: bool) -> Self {
        Self { config, dry_run }
    }

    /// Run the full pipeline. Any data quality failure or configuration
    /// mismatch aborts the run; nothing is retried.
    pub fn run(&self) -> Result<PipelineSummary> {
        let run_start = Instant::now();
        let mut summary = PipelineSummary::default();

        self.prepare_zones()?;
        self.extract_sources()?;
        let curated = self.curate_sources(&mut summary)?;
        self.derive_products(&curated, &mut summary)?;

        if !self.dry_run {
            let path = write_validation_report_json(
                &self.config.paths.data_product_zone,
                &summary.reports,
            )
            .context("write validation report")?;
            summary.report_path = Some(path);
        }

        info!(
            curated = summary.curated.len(),
            data_products = summary.data_products.len(),
            duration_ms = run_start.elapsed().as_millis(),
            "pipeline complete"
        );
        Ok(summary)
    }

    /// Create the zone directories when missing.
    fn prepare_zones(&self) -> Result<()> {
        for zone in [
            &self.config.paths.raw_zone,
            &self.config.paths.curated_zone,
            &self.config.paths.data_product_zone,
        ] {
            std::fs::create_dir_all(zone)
                .with_context(|| format!("create zone {}", zone.display()))?;
        }
        Ok(())
    }

    /// Extract every configured source dataset into the raw zone.
    fn extract_sources(&self) -> Result<()> {
        let span = info_span!("extract");
        let _guard = span.enter();
        for source in &self.config.sources {
            extract_dataset(
                &self.config.paths.archive,
                &self.config.paths.raw_zone,
                &source.file,
            )
            .with_context(|| format!("extract {}", source.file))?;
        }
        info!(datasets = self.config.sources.len(), "raw files loaded");
        Ok(())
    }

    /// Load, validate, and persist each source dataset. Returns the
    /// curated frames keyed by base name for the derive stage.
    fn curate_sources(&self, summary: &mut PipelineSummary) -> Result<BTreeMap<String, DataFrame>> {
        let mut curated = BTreeMap::new();
        for source in &self.config.sources {
            let frame = self.curate_source(source, summary)?;
            curated.insert(source.base_name().to_string(), frame);
        }
        Ok(curated)
    }

    fn curate_source(
        &self,
        source: &SourceDataset,
        summary: &mut PipelineSummary,
    ) -> Result<DataFrame> {
        let base = source.base_name();
        let span = info_span!("curate", dataset = %base);
        let _guard = span.enter();
        let start = Instant::now();

        let schema_path = schema_path_for(&self.config.paths.schema_dir, &source.file);
        let schema = load_dataset_schema(&schema_path)?;
        let raw_path = self.config.paths.raw_zone.join(&source.file);
        let frame = read_dataset_frame(&raw_path, &schema)?;

        let mut report = validate_dataset(&source.validator, &frame, &schema_path)?;
        report.dataset = base.to_string();
        enforce_quality_gate(base, &report)?;
        summary.reports.push(report);

        if !self.dry_run {
            write_frame_csv(&frame, &self.config.paths.curated_zone, base)?;
        }
        summary.curated.push(base.to_string());
        debug!(
            rows = frame.height(),
            duration_ms = start.elapsed().as_millis(),
            "dataset curated"
        );
        Ok(frame)
    }

    /// Derive, validate, and persist both data products.
    fn derive_products(
        &self,
        curated: &BTreeMap<String, DataFrame>,
        summary: &mut PipelineSummary,
    ) -> Result<()> {
        let movies = curated
            .get(MOVIES_DATASET)
            .with_context(|| format!("no curated {MOVIES_DATASET} dataset configured"))?;
        let ratings = curated
            .get(RATINGS_DATASET)
            .with_context(|| format!("no curated {RATINGS_DATASET} dataset configured"))?;

        let stats = movie_rating_stats(movies, ratings)?;
        self.persist_product(&stats, &self.config.data_products.movie_rating_stats, summary)?;

        let top = top_movies_per_user(
            ratings,
            movies,
            self.config.data_products.top_movies_per_user.per_user,
        )?;
        self.persist_product(
            &top,
            &self.config.data_products.top_movies_per_user.product,
            summary,
        )?;
        Ok(())
    }

    fn persist_product(
        &self,
        df: &DataFrame,
        product: &DataProduct,
        summary: &mut PipelineSummary,
    ) -> Result<()> {
        let span = info_span!("data_product", dataset = %product.file_name);
        let _guard = span.enter();
        let start = Instant::now();

        let schema_path = self.config.paths.schema_dir.join(&product.schema_file);
        let mut report = validate_dataset(&product.validator, df, &schema_path)?;
        report.dataset = product.file_name.clone();
        enforce_quality_gate(&product.file_name, &report)?;
        summary.reports.push(report);

        if !self.dry_run {
            write_frame_csv(df, &self.config.paths.data_product_zone, &product.file_name)?;
        }
        summary.data_products.push(product.file_name.clone());
        debug!(
            rows = df.height(),
            duration_ms = start.elapsed().as_millis(),
            "data product persisted"
        );
        Ok(())
    }
}
