use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style {
                    "body { font-family: system-ui, sans-serif; margin: 0; }"
                    "header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px #0002; }"
                    "header ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }"
                    ".container { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }"
                    ".card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 2rem; }"
                    "table { width: 100%; border-collapse: collapse; }"
                    "th, td { padding: 8px; border-bottom: 1px solid #f3f4f6; text-align: left; }"
                    "th { border-bottom: 2px solid #e5e7eb; }"
                }
            }
            body {
                header {
                    h3 { "Listing Reports" }
                    nav {
                        ul {
                            li { a href="/" { "Import" } }
                            li { a href="/reports" { "Reports" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
