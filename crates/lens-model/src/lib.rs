pub mod error;
pub mod report;
pub mod schema;

pub use error::{LensError, Result};
pub use report::{ColumnOutcome, ValidationReport};
pub use schema::{CheckNames, ColumnSchema, ColumnType, DatasetSchema};
