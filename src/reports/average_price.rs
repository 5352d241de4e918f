use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::db::listings::parse_seller_type;
use crate::domain::SellerType;
use crate::formatting::format_currency;
use crate::reports::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragePrice {
    pub average_price: f64,
    pub formatted_average_price: String,
}

impl AveragePrice {
    pub fn new(average_price: f64) -> Result<Self, ReportError> {
        Ok(Self {
            average_price,
            formatted_average_price: format_currency(average_price)?,
        })
    }
}

/// Seller types with no listings are left out rather than reported as zero.
pub type AverageSellingPriceReport = BTreeMap<SellerType, AveragePrice>;

/// Mean listing price per seller type.
pub fn average_price_by_seller_type(
    conn: &Connection,
) -> Result<AverageSellingPriceReport, ReportError> {
    let mut stmt = conn.prepare(
        r#"
        select seller_type, avg(price) as avg_price
        from listing
        group by seller_type
        "#,
    )?;

    let rows = stmt.query_map([], |row| {
        let seller_type: String = row.get(0)?;
        Ok((parse_seller_type(0, &seller_type)?, row.get::<_, f64>(1)?))
    })?;

    let mut report = AverageSellingPriceReport::new();
    for row in rows {
        let (seller_type, avg_price) = row?;
        report.insert(seller_type, AveragePrice::new(avg_price)?);
    }
    Ok(report)
}
