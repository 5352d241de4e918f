use rusqlite::Connection;
use serde::Serialize;

use crate::formatting::format_currency;
use crate::reports::ReportError;

/// Share of contacted listings, in tenths, that counts as "most contacted".
const TOP_SHARE_TENTHS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MostContactedReport {
    /// `None` when there are no contacts at all.
    pub average_price: Option<f64>,
    pub formatted_average_price: Option<String>,
}

/// How many of `contacted` listings make up the top 30%, rounded up.
pub fn top_share(contacted: i64) -> i64 {
    (contacted * TOP_SHARE_TENTHS + 9) / 10
}

/// Average price of the 30% most contacted listings.
///
/// Listings are ranked by contact count; equal counts are ordered by listing
/// id so the cutoff is stable.
pub fn average_price_most_contacted(
    conn: &Connection,
) -> Result<MostContactedReport, ReportError> {
    let contacted: i64 = conn.query_row(
        "select count(distinct listing_id) from contact",
        [],
        |r| r.get(0),
    )?;

    let limit = top_share(contacted);
    if limit == 0 {
        return Ok(MostContactedReport {
            average_price: None,
            formatted_average_price: None,
        });
    }

    let average_price: Option<f64> = conn.query_row(
        r#"
        select avg(price)
        from listing
        where id in (
            select listing_id
            from contact
            group by listing_id
            order by count(*) desc, listing_id asc
            limit ?1
        )
        "#,
        [limit],
        |r| r.get(0),
    )?;

    let formatted_average_price = average_price.map(format_currency).transpose()?;

    Ok(MostContactedReport {
        average_price,
        formatted_average_price,
    })
}
