use thiserror::Error;

use crate::db::DbError;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no data supplied")]
    NoData,
    #[error("unexpected data: unrecognized header {0:?}")]
    UnrecognizedShape(Vec<String>),
    #[error("invalid {field} {value:?}: {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("contact references an unknown listing: {0}")]
    ReferentialIntegrity(String),
    #[error("duplicate listing id: {0}")]
    UniquenessViolation(String),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<DbError> for ImportError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ForeignKey(msg) => ImportError::ReferentialIntegrity(msg),
            DbError::Unique(msg) => ImportError::UniquenessViolation(msg),
            other => ImportError::Storage(other.to_string()),
        }
    }
}
