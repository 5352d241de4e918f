use rusqlite::{params, Connection};

use crate::db::{batch, DbError};
use crate::domain::Contact;

/// Fails with `DbError::ForeignKey` when the listing does not exist.
pub fn insert(conn: &Connection, contact: &Contact) -> Result<(), DbError> {
    conn.execute(
        "INSERT INTO contact (listing_id, contact_date) VALUES (?1, ?2)",
        params![contact.listing_id, contact.contact_date],
    )?;
    Ok(())
}

pub fn insert_many_transactional(
    conn: &mut Connection,
    contacts: &[Contact],
) -> Result<(), DbError> {
    batch::insert_many_transactional(conn, contacts, insert)
}

pub fn all(conn: &Connection) -> Result<Vec<Contact>, DbError> {
    let mut stmt =
        conn.prepare("SELECT listing_id, contact_date FROM contact ORDER BY rowid")?;

    let rows = stmt.query_map([], |row| {
        Ok(Contact {
            listing_id: row.get(0)?,
            contact_date: row.get(1)?,
        })
    })?;

    let mut contacts = Vec::new();
    for row in rows {
        contacts.push(row?);
    }
    Ok(contacts)
}

pub fn count(conn: &Connection) -> Result<i64, DbError> {
    let count = conn.query_row("SELECT COUNT(*) FROM contact", [], |r| r.get(0))?;
    Ok(count)
}
