pub mod db_importer;
pub mod import_error;
pub mod mapping;
pub mod shape;

pub use db_importer::{try_import_csv, ImportKind, ImportSummary};
pub use import_error::ImportError;
