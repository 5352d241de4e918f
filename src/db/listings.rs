use rusqlite::types::Type;
use rusqlite::{params, Connection};

use crate::db::{batch, DbError};
use crate::domain::{Listing, SellerType};

pub fn insert(conn: &Connection, listing: &Listing) -> Result<(), DbError> {
    conn.execute(
        r#"
        INSERT INTO listing (id, make, price, mileage, seller_type)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            listing.id,
            listing.make,
            listing.price,
            listing.mileage,
            listing.seller_type.as_str()
        ],
    )?;
    Ok(())
}

/// All listings or none; a duplicate id anywhere rejects the whole batch.
pub fn insert_many_transactional(
    conn: &mut Connection,
    listings: &[Listing],
) -> Result<(), DbError> {
    batch::insert_many_transactional(conn, listings, insert)
}

pub fn all(conn: &Connection) -> Result<Vec<Listing>, DbError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, make, price, mileage, seller_type
        FROM listing
        ORDER BY rowid
        "#,
    )?;

    let rows = stmt.query_map([], |row| {
        let seller_type: String = row.get(4)?;
        Ok(Listing {
            id: row.get(0)?,
            make: row.get(1)?,
            price: row.get(2)?,
            mileage: row.get(3)?,
            seller_type: parse_seller_type(4, &seller_type)?,
        })
    })?;

    let mut listings = Vec::new();
    for row in rows {
        listings.push(row?);
    }
    Ok(listings)
}

pub fn count(conn: &Connection) -> Result<i64, DbError> {
    let count = conn.query_row("SELECT COUNT(*) FROM listing", [], |r| r.get(0))?;
    Ok(count)
}

pub(crate) fn parse_seller_type(column: usize, raw: &str) -> rusqlite::Result<SellerType> {
    raw.parse::<SellerType>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            Type::Text,
            format!("unknown seller type {:?}", e.0).into(),
        )
    })
}
