//! Read-only aggregate reports over the stored listings and contacts.

pub mod average_price;
pub mod make_distribution;
pub mod most_contacted;
pub mod report_error;
pub mod top_listings;

use rusqlite::Connection;
use serde::Serialize;

pub use average_price::{average_price_by_seller_type, AveragePrice, AverageSellingPriceReport};
pub use make_distribution::{cars_by_make, CarsByMakeReport, MakeShare};
pub use most_contacted::{average_price_most_contacted, MostContactedReport};
pub use report_error::ReportError;
pub use top_listings::{top_listings_by_month, TopListing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    AverageSellingPrice,
    CarsByMake,
    MostContactedAveragePrice,
    TopListingsByMonth,
}

/// The result of [`Report::generate`]; serializes as the bare report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportOutput {
    AverageSellingPrice(AverageSellingPriceReport),
    CarsByMake(CarsByMakeReport),
    MostContactedAveragePrice(MostContactedReport),
    TopListingsByMonth(Vec<Vec<TopListing>>),
}

impl Report {
    pub const ALL: [Report; 4] = [
        Report::AverageSellingPrice,
        Report::CarsByMake,
        Report::MostContactedAveragePrice,
        Report::TopListingsByMonth,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Report::AverageSellingPrice => "average-selling-price",
            Report::CarsByMake => "cars-by-make",
            Report::MostContactedAveragePrice => "most-contacted",
            Report::TopListingsByMonth => "top-listings-by-month",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Report::AverageSellingPrice => "Average listing selling price per seller type",
            Report::CarsByMake => "Percentual distribution of available cars by make",
            Report::MostContactedAveragePrice => "Average price of the 30% most contacted listings",
            Report::TopListingsByMonth => "The top 5 most contacted listings per month",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Report> {
        Report::ALL.into_iter().find(|r| r.slug() == slug)
    }

    pub fn generate(&self, conn: &Connection) -> Result<ReportOutput, ReportError> {
        Ok(match self {
            Report::AverageSellingPrice => {
                ReportOutput::AverageSellingPrice(average_price_by_seller_type(conn)?)
            }
            Report::CarsByMake => ReportOutput::CarsByMake(cars_by_make(conn)?),
            Report::MostContactedAveragePrice => {
                ReportOutput::MostContactedAveragePrice(average_price_most_contacted(conn)?)
            }
            Report::TopListingsByMonth => {
                ReportOutput::TopListingsByMonth(top_listings_by_month(conn)?)
            }
        })
    }
}
