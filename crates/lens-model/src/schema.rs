//! Declarative dataset schema types.
//!
//! Each dataset ships with a `<dataset-base-name>.yml` file describing its
//! columns: name, scalar type, whether data-quality checking is enabled, and
//! which check kinds apply. The schema drives both frame loading (column
//! names and types) and the validation engine (which checks to run).

use serde::Deserialize;

/// Scalar type a column is coerced to after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    String,
    Categorical,
}

/// Check tags attached to a column. Schema files may use either a single
/// string or a list of strings, e.g. `check_name: unique` or
/// `check_name: [unique, custom]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CheckNames {
    #[default]
    Unset,
    One(String),
    Many(Vec<String>),
}

impl CheckNames {
    /// True when any tag mentions the given check kind. A tag like
    /// `custom:range` still matches `custom`.
    pub fn mentions(&self, kind: &str) -> bool {
        match self {
            CheckNames::Unset => false,
            CheckNames::One(tag) => tag.contains(kind),
            CheckNames::Many(tags) => tags.iter().any(|tag| tag.contains(kind)),
        }
    }
}

/// One column definition inside a dataset schema.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// When false the column is excluded from all validation regardless of
    /// its check tags.
    pub dqt_enabled: bool,
    #[serde(default)]
    pub check_name: CheckNames,
}

impl ColumnSchema {
    pub fn wants_unique_check(&self) -> bool {
        self.dqt_enabled && self.check_name.mentions("unique")
    }

    pub fn wants_custom_check(&self) -> bool {
        self.dqt_enabled && self.check_name.mentions("custom")
    }
}

/// Ordered column definitions for one dataset. Loaded once per validation
/// call and immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSchema {
    pub columns: Vec<ColumnSchema>,
}

impl DatasetSchema {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.name.as_str()).collect()
    }

    /// Columns needing a uniqueness check, in schema order.
    pub fn unique_check_columns(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(|col| col.wants_unique_check())
    }

    /// Columns needing a custom predicate check, in schema order.
    pub fn custom_check_columns(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(|col| col.wants_custom_check())
    }
}
