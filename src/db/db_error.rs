use rusqlite::ffi;
use thiserror::Error;

/// Storage failures, with the constraint violations an import cares about
/// split out from everything else SQLite can report.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("foreign key constraint failed: {0}")]
    ForeignKey(String),
    #[error("uniqueness constraint failed: {0}")]
    Unique(String),
    #[error("open DB failed: {0}")]
    Connection(String),
    #[error("failed to apply schema: {0}")]
    Schema(String),
    #[error(transparent)]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(ref code, ref msg) = err {
            let detail = msg.clone().unwrap_or_else(|| code.to_string());
            match code.extended_code {
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => return DbError::ForeignKey(detail),
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    return DbError::Unique(detail)
                }
                _ => {}
            }
        }
        DbError::Sqlite(err)
    }
}
