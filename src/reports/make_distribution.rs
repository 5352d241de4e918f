use rusqlite::Connection;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::reports::ReportError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeShare {
    pub make: String,
    pub count: i64,
    /// Share of all listings, truncated: three makes at 1/3 each show "33%".
    pub formatted_percent: String,
}

/// Listing counts per make, most common first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarsByMakeReport {
    pub entries: Vec<MakeShare>,
}

impl CarsByMakeReport {
    pub fn get(&self, make: &str) -> Option<&MakeShare> {
        self.entries.iter().find(|e| e.make == make)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as `{ "<make>": { "count": .., "formattedPercent": .. } }` in
// report order.
impl Serialize for CarsByMakeReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Entry<'a> {
            count: i64,
            formatted_percent: &'a str,
        }

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for e in &self.entries {
            map.serialize_entry(
                &e.make,
                &Entry {
                    count: e.count,
                    formatted_percent: &e.formatted_percent,
                },
            )?;
        }
        map.end()
    }
}

pub fn cars_by_make(conn: &Connection) -> Result<CarsByMakeReport, ReportError> {
    let mut stmt = conn.prepare(
        r#"
        select make, count(*) as make_count
        from listing
        group by make
        order by make_count desc, make asc
        "#,
    )?;

    let counts = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let total: i64 = counts.iter().map(|(_, count)| count).sum();

    let entries = counts
        .into_iter()
        .map(|(make, count)| MakeShare {
            formatted_percent: format!("{}%", count * 100 / total),
            make,
            count,
        })
        .collect();

    Ok(CarsByMakeReport { entries })
}
