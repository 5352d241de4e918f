use crate::formatting::format_mileage;
use crate::reports::{
    AverageSellingPriceReport, CarsByMakeReport, MostContactedReport, Report, TopListing,
};
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub struct ReportsVm {
    pub average_selling_price: AverageSellingPriceReport,
    pub cars_by_make: CarsByMakeReport,
    pub most_contacted: MostContactedReport,
    pub top_listings_by_month: Vec<Vec<TopListing>>,
}

pub fn reports_page(vm: &ReportsVm) -> Markup {
    desktop_layout(
        "Reports",
        html! {
            main class="container" {
                h1 { "Reports" }

                (card(Report::AverageSellingPrice.title(), html! {
                    @if vm.average_selling_price.is_empty() {
                        p { "No listings imported yet." }
                    } @else {
                        table {
                            thead { tr { th { "Seller Type" } th { "Average in Euro" } } }
                            tbody {
                                @for (seller_type, avg) in &vm.average_selling_price {
                                    tr { td { (seller_type.as_str()) } td { (avg.formatted_average_price) } }
                                }
                            }
                        }
                    }
                }))

                (card(Report::CarsByMake.title(), html! {
                    @if vm.cars_by_make.is_empty() {
                        p { "No listings imported yet." }
                    } @else {
                        table {
                            thead { tr { th { "Make" } th { "Distribution" } } }
                            tbody {
                                @for share in &vm.cars_by_make.entries {
                                    tr { td { (share.make) } td { (share.formatted_percent) } }
                                }
                            }
                        }
                    }
                }))

                (card(Report::MostContactedAveragePrice.title(), html! {
                    @match &vm.most_contacted.formatted_average_price {
                        Some(price) => p { "Average price: " strong { (price) } },
                        None => p { "No contacts imported yet." },
                    }
                }))

                (card(Report::TopListingsByMonth.title(), html! {
                    @if vm.top_listings_by_month.is_empty() {
                        p { "No contacts imported yet." }
                    }
                    @for month in &vm.top_listings_by_month {
                        @if let Some(first) = month.first() {
                            h3 { "Month: " (first.month) }
                        }
                        table {
                            thead {
                                tr {
                                    th { "Ranking" }
                                    th { "Listing Id" }
                                    th { "Make" }
                                    th { "Selling Price" }
                                    th { "Mileage" }
                                    th { "Total Amount of contacts" }
                                }
                            }
                            tbody {
                                @for listing in month {
                                    tr {
                                        td { (listing.ranking) }
                                        td { (listing.listing_id) }
                                        td { (listing.make) }
                                        td { (listing.formatted_price) }
                                        td {
                                            @match format_mileage(listing.mileage) {
                                                Ok(km) => (km),
                                                Err(_) => (listing.mileage),
                                            }
                                        }
                                        td { (listing.contact_count) }
                                    }
                                }
                            }
                        }
                    }
                }))
            }
        },
    )
}
