use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Who is selling a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerType {
    Private,
    Dealer,
    Other,
}

impl SellerType {
    pub const ALL: [SellerType; 3] = [SellerType::Private, SellerType::Dealer, SellerType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            SellerType::Private => "private",
            SellerType::Dealer => "dealer",
            SellerType::Other => "other",
        }
    }
}

impl fmt::Display for SellerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSellerType(pub String);

impl FromStr for SellerType {
    type Err = UnknownSellerType;

    // Exact, case-sensitive match on the stored text form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SellerType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownSellerType(s.to_string()))
    }
}

/// A vehicle for sale, keyed by the id supplied in the import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub make: String,
    pub price: i64,
    pub mileage: i64,
    pub seller_type: SellerType,
}
