use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {}
            }
            body {
                div class="app" {
                    header class="header" {
                        div class="container" {
                            h1 class="logo" { "🚗 DriveScope" }
                            p class="tagline" { "Find your perfect used car" }
                        }
                    }

                    (content)

                    footer class="footer" {
                        div class="container" {
                            p { "© 2024 DriveScope. All rights reserved." }
                        }
                    }
                }
            }
        }
    }
}
