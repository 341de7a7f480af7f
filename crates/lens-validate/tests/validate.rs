//! Integration tests for the validation engine against real schema files.

use std::path::PathBuf;

use polars::prelude::{DataFrame, NamedFrom, Series};

use lens_model::LensError;
use lens_validate::{enforce_quality_gate, validate_dataset};

fn write_schema(dir: &tempfile::TempDir, name: &str, yaml: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, yaml).unwrap();
    path
}

fn ratings_frame(ratings: Vec<i64>) -> DataFrame {
    let len = ratings.len();
    DataFrame::new(vec![
        Series::new("userid".into(), (1..=len as i64).collect::<Vec<_>>()).into(),
        Series::new("movieid".into(), (1..=len as i64).collect::<Vec<_>>()).into(),
        Series::new("ratings".into(), ratings).into(),
        Series::new("timestamp".into(), vec![978300760i64; len]).into(),
    ])
    .unwrap()
}

const RATINGS_SCHEMA: &str = r#"columns:
  - name: userid
    type: integer
    dqt_enabled: true
    check_name: custom
  - name: movieid
    type: integer
    dqt_enabled: true
    check_name: custom
  - name: ratings
    type: integer
    dqt_enabled: true
    check_name: custom
  - name: timestamp
    type: integer
    dqt_enabled: false
    check_name: none
"#;

const MOVIES_SCHEMA: &str = r#"columns:
  - name: movieid
    type: integer
    dqt_enabled: true
    check_name: [unique, custom]
  - name: title
    type: string
    dqt_enabled: false
    check_name: none
"#;

#[test]
fn distinct_column_passes_uniqueness_and_duplicate_fails() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir, "movies.yml", MOVIES_SCHEMA);

    let distinct = DataFrame::new(vec![
        Series::new("movieid".into(), vec![1i64, 2, 3]).into(),
        Series::new("title".into(), vec!["a", "b", "c"]).into(),
    ])
    .unwrap();
    let report = validate_dataset("movie", &distinct, &schema).unwrap();
    assert_eq!(report.get("movieid"), Some(true));

    let duplicated = DataFrame::new(vec![
        Series::new("movieid".into(), vec![1i64, 2, 2]).into(),
        Series::new("title".into(), vec!["a", "b", "b2"]).into(),
    ])
    .unwrap();
    let report = validate_dataset("movie", &duplicated, &schema).unwrap();
    assert_eq!(report.get("movieid"), Some(false));
}

#[test]
fn both_check_kinds_on_one_column_share_a_single_anded_entry() {
    // movieids [1, 2, 2]: uniqueness fails, the custom range predicate
    // passes; the merged entry must stay false.
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir, "movies.yml", MOVIES_SCHEMA);

    let df = DataFrame::new(vec![
        Series::new("movieid".into(), vec![1i64, 2, 2]).into(),
        Series::new("title".into(), vec!["a", "b", "b2"]).into(),
    ])
    .unwrap();

    let report = validate_dataset("movie", &df, &schema).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.get("movieid"), Some(false));
}

#[test]
fn unknown_validator_runs_unique_checks_only_and_never_raises() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir, "movies.yml", MOVIES_SCHEMA);

    let df = DataFrame::new(vec![
        Series::new("movieid".into(), vec![1i64, 2, 9999]).into(),
        Series::new("title".into(), vec!["a", "b", "c"]).into(),
    ])
    .unwrap();

    // movieid 9999 is out of range but the custom pass is skipped, so only
    // the uniqueness outcome appears and it passes.
    let report = validate_dataset("genome", &df, &schema).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.get("movieid"), Some(true));
}

#[test]
fn unknown_validator_with_no_unique_columns_yields_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir, "ratings.yml", RATINGS_SCHEMA);

    let report = validate_dataset("genome", &ratings_frame(vec![1, 2, 3]), &schema).unwrap();
    assert!(report.is_empty());
    assert!(enforce_quality_gate("ratings", &report).is_ok());
}

#[test]
fn dqt_disabled_column_never_appears_in_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir, "ratings.yml", RATINGS_SCHEMA);

    let report = validate_dataset("rating", &ratings_frame(vec![5, 4, 3]), &schema).unwrap();
    assert_eq!(report.get("timestamp"), None);
}

#[test]
fn valid_ratings_dataset_passes_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir, "ratings.yml", RATINGS_SCHEMA);

    let report = validate_dataset("rating", &ratings_frame(vec![1, 5, 3]), &schema).unwrap();
    assert!(!report.is_empty());
    assert!(report.all_passed());
    assert!(enforce_quality_gate("ratings", &report).is_ok());
}

#[test]
fn out_of_range_rating_fails_and_trips_the_gate() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir, "ratings.yml", RATINGS_SCHEMA);

    let report = validate_dataset("rating", &ratings_frame(vec![1, 7, 3]), &schema).unwrap();
    assert_eq!(report.get("ratings"), Some(false));
    assert_eq!(report.get("userid"), Some(true));
    assert_eq!(report.get("movieid"), Some(true));

    let error = enforce_quality_gate("ratings", &report).unwrap_err();
    assert!(matches!(error, LensError::DataQuality { .. }));
}

#[test]
fn report_order_is_unique_columns_then_custom_columns_in_schema_order() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(
        &dir,
        "users.yml",
        r#"columns:
  - name: userid
    type: integer
    dqt_enabled: true
    check_name: [unique, custom]
  - name: gender
    type: categorical
    dqt_enabled: true
    check_name: custom
  - name: age
    type: integer
    dqt_enabled: true
    check_name: custom
  - name: occupation
    type: integer
    dqt_enabled: true
    check_name: custom
"#,
    );

    let df = DataFrame::new(vec![
        Series::new("userid".into(), vec![1i64, 2]).into(),
        Series::new("gender".into(), vec!["M", "F"]).into(),
        Series::new("age".into(), vec![25i64, 45]).into(),
        Series::new("occupation".into(), vec![3i64, 15]).into(),
    ])
    .unwrap();

    let report = validate_dataset("user", &df, &schema).unwrap();
    let order: Vec<&str> = report
        .outcomes
        .iter()
        .map(|outcome| outcome.column.as_str())
        .collect();
    assert_eq!(order, vec!["userid", "gender", "age", "occupation"]);
    assert!(report.all_passed());
}

#[test]
fn validate_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir, "ratings.yml", RATINGS_SCHEMA);
    let df = ratings_frame(vec![2, 7, 4]);

    let first = validate_dataset("rating", &df, &schema).unwrap();
    let second = validate_dataset("rating", &df, &schema).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_predicate_for_custom_column_is_a_lookup_error() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(
        &dir,
        "movies.yml",
        r#"columns:
  - name: genres
    type: categorical
    dqt_enabled: true
    check_name: custom
"#,
    );

    let df = DataFrame::new(vec![
        Series::new("genres".into(), vec!["Drama", "Comedy"]).into(),
    ])
    .unwrap();

    let error = validate_dataset("movie", &df, &schema).unwrap_err();
    match error {
        LensError::ValidatorLookup { validator, column } => {
            assert_eq!(validator, "movie");
            assert_eq!(column, "genres");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_column_absent_from_frame_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(&dir, "movies.yml", MOVIES_SCHEMA);

    let df = DataFrame::new(vec![
        Series::new("title".into(), vec!["a", "b"]).into(),
    ])
    .unwrap();

    let error = validate_dataset("movie", &df, &schema).unwrap_err();
    assert!(matches!(error, LensError::MissingColumn { .. }));
}

#[test]
fn missing_schema_file_is_a_parse_error() {
    let df = ratings_frame(vec![1]);
    let error =
        validate_dataset("rating", &df, std::path::Path::new("/nonexistent.yml")).unwrap_err();
    assert!(matches!(error, LensError::SchemaParse { .. }));
}
