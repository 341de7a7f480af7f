//! Dataset schema loading.
//!
//! Schemas follow the `<dataset-base-name>.yml` naming convention under a
//! configured schema directory. Loading is deliberately uncached: schemas
//! are small and callers re-load per validation call.

use std::path::{Path, PathBuf};

use lens_model::{DatasetSchema, LensError, Result};

/// Load and parse a dataset schema file.
///
/// Any failure (missing file, malformed YAML, column entry lacking a
/// required field) is a fatal `SchemaParse` error.
pub fn load_dataset_schema(path: &Path) -> Result<DatasetSchema> {
    let text = std::fs::read_to_string(path).map_err(|error| LensError::SchemaParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let schema: DatasetSchema =
        serde_yaml::from_str(&text).map_err(|error| LensError::SchemaParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    if schema.columns.is_empty() {
        return Err(LensError::SchemaParse {
            path: path.to_path_buf(),
            message: "schema declares no columns".to_string(),
        });
    }
    Ok(schema)
}

/// Resolve the schema path for a dataset file name, e.g. `movies.dat`
/// maps to `<schema_dir>/movies.yml`.
pub fn schema_path_for(schema_dir: &Path, dataset_file: &str) -> PathBuf {
    let base = dataset_file
        .rsplit_once('.')
        .map_or(dataset_file, |(stem, _ext)| stem);
    schema_dir.join(format!("{base}.yml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_well_formed_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ratings.yml");
        std::fs::write(
            &path,
            r#"columns:
  - name: userid
    type: integer
    dqt_enabled: true
    check_name: custom
  - name: ratings
    type: integer
    dqt_enabled: true
    check_name: custom
"#,
        )
        .unwrap();

        let schema = load_dataset_schema(&path).unwrap();
        assert_eq!(schema.column_names(), vec!["userid", "ratings"]);
    }

    #[test]
    fn missing_file_is_schema_parse_error() {
        let error = load_dataset_schema(Path::new("/nonexistent/movies.yml")).unwrap_err();
        assert!(matches!(error, LensError::SchemaParse { .. }));
    }

    #[test]
    fn malformed_entry_is_schema_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.yml");
        std::fs::write(&path, "columns:\n- name: movieid\n").unwrap();

        let error = load_dataset_schema(&path).unwrap_err();
        assert!(matches!(error, LensError::SchemaParse { .. }));
    }

    #[test]
    fn schema_path_follows_base_name_convention() {
        let path = schema_path_for(Path::new("schema"), "movies.dat");
        assert_eq!(path, Path::new("schema/movies.yml"));
        let path = schema_path_for(Path::new("schema"), "top_movies_per_user");
        assert_eq!(path, Path::new("schema/top_movies_per_user.yml"));
    }
}
