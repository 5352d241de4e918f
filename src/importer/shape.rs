pub const LISTING_HEADER: [&str; 5] = ["id", "make", "price", "mileage", "seller_type"];
pub const CONTACT_HEADER: [&str; 2] = ["listing_id", "contact_date"];

/// True iff `actual` holds exactly the `expected` keys in the same positions.
pub fn properties_match<S: AsRef<str>>(expected: &[&str], actual: &[S]) -> bool {
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .all(|(want, got)| *want == got.as_ref())
}
