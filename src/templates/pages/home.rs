// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub struct HomeVm {
    pub listing_count: i64,
    pub contact_count: i64,
    pub max_upload_bytes: u64,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Import",
        html! {
            main class="container" {
                h1 { "Import CSV" }

                (card("Stored data", html! {
                    p { strong { (vm.listing_count) } " listings, " strong { (vm.contact_count) } " contacts" }
                    p { a href="/reports" { "View reports" } }
                }))

                (card("Upload", html! {
                    p {
                        "Paste a listings file (" code { "id,make,price,mileage,seller_type" } ") "
                        "or a contacts file (" code { "listing_id,contact_date" } ")."
                        " Contacts can only reference listings that are already imported."
                    }
                    form action="/import" method="post" {
                        textarea name="csv" rows="12" style="width: 100%; font-family: monospace;" required {}
                        button type="submit" { "Import" }
                    }
                    p {
                        "Files up to " (vm.max_upload_bytes / (1024 * 1024)) " MiB can also be posted directly: "
                        code { "curl --data-binary @listings.csv -H 'Content-Type: text/csv' /import" }
                    }
                }))
            }
        },
    )
}
