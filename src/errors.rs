// errors.rs
use thiserror::Error;

use crate::db::DbError;
use crate::importer::ImportError;
use crate::reports::ReportError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, import).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Payload Too Large: upload exceeds {0} bytes")]
    PayloadTooLarge(u64),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl From<DbError> for ServerError {
    fn from(err: DbError) -> Self {
        ServerError::DbError(err.to_string())
    }
}

impl From<ReportError> for ServerError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Db(e) => e.into(),
            ReportError::Format(_) => ServerError::InternalError,
        }
    }
}

// Anything the caller sent wrong is a client error; only a failing store is ours.
impl From<ImportError> for ServerError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Storage(msg) => ServerError::DbError(msg),
            other => ServerError::BadRequest(other.to_string()),
        }
    }
}
