pub mod archive;
pub mod frame;
pub mod schema;
pub mod values;

pub use archive::extract_dataset;
pub use frame::read_dataset_frame;
pub use schema::{load_dataset_schema, schema_path_for};
pub use values::{any_to_string, parse_f64, parse_i64};
