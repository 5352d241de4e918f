use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::db::{contacts, listings, Database, DbError};
use crate::importer::{try_import_csv, ImportError};

/// Loads `listings.csv` and `contacts.csv` from `dir` into whichever of the
/// two tables is still empty. Returns the number of rows seeded.
pub fn seed_if_empty(db: &Database, dir: impl AsRef<Path>) -> Result<usize, ImportError> {
    let dir = dir.as_ref();

    let (listing_count, contact_count) = db.with_conn(|conn| {
        Ok::<_, DbError>((listings::count(conn)?, contacts::count(conn)?))
    })?;

    let mut seeded = 0;
    if listing_count == 0 {
        seeded += seed_file(db, &dir.join("listings.csv"))?;
    }
    if contact_count == 0 {
        seeded += seed_file(db, &dir.join("contacts.csv"))?;
    }
    Ok(seeded)
}

fn seed_file(db: &Database, path: &Path) -> Result<usize, ImportError> {
    let csv = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "sample data not found, skipping");
            return Ok(0);
        }
    };

    let summary = try_import_csv(db, csv)?;
    info!(path = %path.display(), kind = %summary.kind, rows = summary.rows, "seeded sample data");
    Ok(summary.rows)
}
