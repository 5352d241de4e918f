use rusqlite::{params, Connection};
use serde::Serialize;

use crate::formatting::CurrencyFormat;
use crate::reports::ReportError;

pub const LISTINGS_PER_MONTH: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopListing {
    pub listing_id: i64,
    pub make: String,
    pub price: i64,
    pub mileage: i64,
    pub contact_count: i64,
    /// `MM.YYYY`, UTC.
    pub month: String,
    /// 1-based position within the month.
    pub ranking: usize,
    pub formatted_price: String,
}

/// Months that have contacts, labelled `MM.YYYY` and ordered by their
/// earliest contact. Dates SQLite cannot label are left out.
pub fn contact_months(conn: &Connection) -> Result<Vec<String>, ReportError> {
    let mut stmt = conn.prepare(
        r#"
        select strftime('%m.%Y', contact_date / 1000, 'unixepoch') as month,
               min(contact_date) as first_contact
        from contact
        group by month
        having month is not null
        order by first_contact
        "#,
    )?;

    let months = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(months)
}

/// The five most contacted listings of every month.
pub fn top_listings_by_month(conn: &Connection) -> Result<Vec<Vec<TopListing>>, ReportError> {
    let mut stmt = conn.prepare(
        r#"
        select l.id,
               l.make,
               l.price,
               l.mileage,
               count(*) as contact_count
        from contact c
        join listing l on l.id = c.listing_id
        where strftime('%m.%Y', c.contact_date / 1000, 'unixepoch') = ?1
        group by l.id
        order by contact_count desc, l.id asc
        limit ?2
        "#,
    )?;

    let mut report = Vec::new();
    for month in contact_months(conn)? {
        let rows = stmt
            .query_map(params![month, LISTINGS_PER_MONTH], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut top = Vec::with_capacity(rows.len());
        for (index, (listing_id, make, price, mileage, contact_count)) in
            rows.into_iter().enumerate()
        {
            top.push(TopListing {
                listing_id,
                make,
                price,
                mileage,
                contact_count,
                month: month.clone(),
                ranking: index + 1,
                formatted_price: CurrencyFormat::EURO.format_whole(price)?,
            });
        }
        report.push(top);
    }

    Ok(report)
}
