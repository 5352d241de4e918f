use rusqlite::Connection;
use tracing::debug;

use crate::db::DbError;

/// Inserts `records` one at a time inside a single transaction.
///
/// Either every record is committed or, on the first failing insert, the
/// transaction is rolled back and that error returned.
pub fn insert_many_transactional<T, F>(
    conn: &mut Connection,
    records: &[T],
    insert_one: F,
) -> Result<(), DbError>
where
    F: Fn(&Connection, &T) -> Result<(), DbError>,
{
    let tx = conn.transaction()?;

    for (index, record) in records.iter().enumerate() {
        if let Err(err) = insert_one(&tx, record) {
            debug!(index, error = %err, "batch insert failed, rolling back");
            tx.rollback()?;
            return Err(err);
        }
    }

    tx.commit()?;
    Ok(())
}
