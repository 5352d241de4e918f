// src/importer/mapping.rs
//
// Turns untyped CSV rows into listings and contacts. Nothing here touches
// storage; the first invalid field rejects the row and with it the batch.

use csv::StringRecord;

use crate::domain::{Contact, Listing, SellerType};
use crate::importer::ImportError;

/// One parsed CSV row: column name to raw text, in header order.
#[derive(Debug, Clone)]
pub struct CsvRow {
    fields: Vec<(String, String)>,
}

impl CsvRow {
    pub fn new(header: &[String], record: &StringRecord) -> Self {
        let fields = header
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        Self { fields }
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { fields }
    }

    pub fn keys(&self) -> Vec<&str> {
        self.fields.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn require(&self, field: &'static str) -> Result<&str, ImportError> {
        self.get(field).ok_or_else(|| ImportError::InvalidField {
            field,
            value: String::new(),
            reason: "missing".into(),
        })
    }
}

/// Leading-integer parse: skips leading whitespace, accepts a sign, reads the
/// digit run and ignores whatever follows it (`"12abc"` is 12). Fails when
/// there are no digits, the value is negative, or it does not fit in `i64`.
pub fn parse_non_negative(field: &'static str, raw: &str) -> Result<i64, ImportError> {
    let invalid = |reason: &str| ImportError::InvalidField {
        field,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let s = raw.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return Err(invalid("not a number"));
    }

    let value: i64 = digits.parse().map_err(|_| invalid("out of range"))?;
    if negative && value != 0 {
        return Err(invalid("must not be negative"));
    }
    Ok(value)
}

pub fn parse_seller_type(raw: &str) -> Result<SellerType, ImportError> {
    raw.parse().map_err(|_| ImportError::InvalidField {
        field: "seller_type",
        value: raw.to_string(),
        reason: "expected one of private, dealer, other".into(),
    })
}

pub fn map_listing(row: &CsvRow) -> Result<Listing, ImportError> {
    let id = parse_non_negative("id", row.require("id")?)?;
    let mileage = parse_non_negative("mileage", row.require("mileage")?)?;
    let price = parse_non_negative("price", row.require("price")?)?;
    let seller_type = parse_seller_type(row.require("seller_type")?)?;

    let make = row.require("make")?;
    if make.trim().is_empty() {
        return Err(ImportError::InvalidField {
            field: "make",
            value: make.to_string(),
            reason: "make has to be set".into(),
        });
    }

    Ok(Listing {
        id,
        make: make.to_string(),
        price,
        mileage,
        seller_type,
    })
}

/// Last millisecond of 9999-12-31 UTC; SQLite cannot label later dates.
pub const MAX_CONTACT_DATE: i64 = 253_402_300_799_999;

pub fn map_contact(row: &CsvRow) -> Result<Contact, ImportError> {
    let listing_id = parse_non_negative("listing_id", row.require("listing_id")?)?;

    let raw_date = row.require("contact_date")?;
    let contact_date = parse_non_negative("contact_date", raw_date)?;
    if contact_date > MAX_CONTACT_DATE {
        return Err(ImportError::InvalidField {
            field: "contact_date",
            value: raw_date.to_string(),
            reason: "date is after 9999-12-31".into(),
        });
    }

    Ok(Contact {
        listing_id,
        contact_date,
    })
}
