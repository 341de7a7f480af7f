mod engine;
mod registry;
mod rules;

pub use engine::validate_dataset;
pub use registry::{DatasetValidator, Predicate};
pub use rules::{valid_age, valid_gender, valid_movieid, valid_occupation, valid_ratings, valid_userid};

use tracing::info;

use lens_model::{LensError, Result, ValidationReport};

/// Interpret a validation report as a pipeline gate.
///
/// Three-way classification: an empty report means no checks are
/// configured and the stage proceeds; a non-empty all-true report passes;
/// any false outcome is a fatal `DataQuality` error carrying the full
/// report, and the caller must not persist the dataset.
pub fn enforce_quality_gate(dataset: &str, report: &ValidationReport) -> Result<()> {
    if report.is_empty() {
        info!(dataset = %dataset, "data quality validation not enabled");
        return Ok(());
    }
    if report.all_passed() {
        info!(dataset = %dataset, checks = report.len(), "data quality validation passed");
        return Ok(());
    }
    Err(LensError::DataQuality {
        dataset: dataset.to_string(),
        report: report.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_passes_the_gate() {
        let report = ValidationReport::new("genome");
        assert!(enforce_quality_gate("genome", &report).is_ok());
    }

    #[test]
    fn all_true_report_passes_the_gate() {
        let mut report = ValidationReport::new("movie");
        report.record("movieid", true);
        assert!(enforce_quality_gate("movies", &report).is_ok());
    }

    #[test]
    fn any_false_outcome_is_a_data_quality_error() {
        let mut report = ValidationReport::new("rating");
        report.record("userid", true);
        report.record("ratings", false);

        let error = enforce_quality_gate("ratings", &report).unwrap_err();
        match error {
            LensError::DataQuality { dataset, report } => {
                assert_eq!(dataset, "ratings");
                assert_eq!(report.failed_columns(), vec!["ratings"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
