use serde::Serialize;

/// A buyer inquiry for one listing. `contact_date` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub listing_id: i64,
    pub contact_date: i64,
}
