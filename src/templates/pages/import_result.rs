use crate::importer::ImportSummary;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn import_result_page(summary: &ImportSummary) -> Markup {
    desktop_layout(
        "Import complete",
        html! {
            main class="container" {
                h1 { "Import complete" }
                p { "Imported " strong { (summary.rows) } " " (summary.kind.to_string()) "." }
                p {
                    a href="/" { "Import another file" }
                    " · "
                    a href="/reports" { "View reports" }
                }
            }
        },
    )
}
