use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::db::DbError;

// Thread-local connection slot, remembered together with the file it points at.
thread_local! {
    static DB_CONN: RefCell<Option<(PathBuf, Connection)>> = const { RefCell::new(None) };
}

#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open or fetch the per-thread SQLite connection and run `f(conn)`.
    ///
    /// Every connection is opened with foreign keys enforced; the contact
    /// table relies on it.
    pub fn with_conn<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Connection) -> Result<T, E>,
        E: From<DbError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();

                let stale = match slot.as_ref() {
                    Some((path, _)) => path != &self.path,
                    None => true,
                };
                if stale {
                    *slot = Some((self.path.clone(), open(&self.path)?));
                }

                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(DbError::Connection("connection slot empty".into()).into()),
                }
            })
            .map_err(|e| DbError::Connection(e.to_string()))?
    }
}

fn open(path: &Path) -> Result<Connection, DbError> {
    debug!(path = %path.display(), "opening sqlite connection");
    let conn = Connection::open(path).map_err(|e| DbError::Connection(e.to_string()))?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    Ok(conn)
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: impl AsRef<Path>) -> Result<(), DbError> {
    let schema_path = schema_path.as_ref();
    let schema_sql = fs::read_to_string(schema_path).map_err(|e| {
        DbError::Schema(format!("failed to read {}: {e}", schema_path.display()))
    })?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| DbError::Schema(e.to_string()))
    })?;

    info!(schema = %schema_path.display(), "database initialized");
    Ok(())
}
