use thiserror::Error;

use crate::db::DbError;
use crate::formatting::FormatError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("report formatting failed: {0}")]
    Format(#[from] FormatError),
}

impl From<rusqlite::Error> for ReportError {
    fn from(err: rusqlite::Error) -> Self {
        ReportError::Db(err.into())
    }
}
