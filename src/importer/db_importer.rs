use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

use crate::db::{contacts, listings, Database};
use crate::importer::mapping::{map_contact, map_listing, CsvRow};
use crate::importer::shape::{properties_match, CONTACT_HEADER, LISTING_HEADER};
use crate::importer::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Listings,
    Contacts,
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportKind::Listings => f.write_str("listings"),
            ImportKind::Contacts => f.write_str("contacts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub kind: ImportKind,
    pub rows: usize,
}

/// Imports one CSV payload as a single all-or-nothing batch.
///
/// The header decides whether the payload holds listings or contacts. Every
/// row is validated before anything is written, and the insert runs in one
/// transaction, so a failed call leaves storage exactly as it was.
pub fn try_import_csv(
    db: &Database,
    payload: impl AsRef<[u8]>,
) -> Result<ImportSummary, ImportError> {
    let result = import(db, payload.as_ref());
    match &result {
        Ok(summary) => info!(kind = %summary.kind, rows = summary.rows, "csv imported"),
        Err(err) => warn!(error = %err, "csv import rejected"),
    }
    result
}

fn import(db: &Database, payload: &[u8]) -> Result<ImportSummary, ImportError> {
    let rows = read_rows(payload)?;
    let first = rows.first().ok_or(ImportError::NoData)?;
    let shape = first.keys();

    if properties_match(&LISTING_HEADER, &shape) {
        let records = rows.iter().map(map_listing).collect::<Result<Vec<_>, _>>()?;
        db.with_conn(|conn| {
            listings::insert_many_transactional(conn, &records).map_err(ImportError::from)
        })?;
        Ok(ImportSummary {
            kind: ImportKind::Listings,
            rows: records.len(),
        })
    } else if properties_match(&CONTACT_HEADER, &shape) {
        let records = rows.iter().map(map_contact).collect::<Result<Vec<_>, _>>()?;
        db.with_conn(|conn| {
            contacts::insert_many_transactional(conn, &records).map_err(ImportError::from)
        })?;
        Ok(ImportSummary {
            kind: ImportKind::Contacts,
            rows: records.len(),
        })
    } else {
        Err(ImportError::UnrecognizedShape(
            shape.into_iter().map(str::to_string).collect(),
        ))
    }
}

// Rows must have exactly as many fields as the header. Blank lines are
// skipped by the reader and never count as rows.
fn read_rows(payload: &[u8]) -> Result<Vec<CsvRow>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(payload);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(CsvRow::new(&header, &record?));
    }
    Ok(rows)
}
