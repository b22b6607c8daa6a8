use crate::shell::ShellState;
use crate::templates::components::car_card;
use maud::{html, Markup};

/// Error banner, then either the loading indicator or the result grid.
///
/// While loading, the section polls `/results` until the search settles. When
/// idle it carries a hidden loading block that htmx reveals, in place of the
/// grid, while a search or reset swap is in flight.
pub fn results_section(state: &ShellState) -> Markup {
    html! {
        @if state.loading {
            section id="results" hx-get="/results" hx-trigger="load delay:500ms" hx-swap="outerHTML" {
                (error_banner(state.error.as_deref()))
                (loading_block("loading"))
                noscript {
                    p class="loading" { a href="/search" { "Show results" } }
                }
            }
        } @else {
            section id="results" {
                (error_banner(state.error.as_deref()))
                (loading_block("loading htmx-indicator"))
                div class="results-header" {
                    h2 { "Available Cars (" (state.cars.len()) ")" }
                }
                div class="car-grid" {
                    @if state.cars.is_empty() {
                        div class="no-results" {
                            p { "No cars found. Try adjusting your filters." }
                        }
                    } @else {
                        @for car in &state.cars {
                            (car_card(car))
                        }
                    }
                }
            }
        }
    }
}

fn loading_block(class: &str) -> Markup {
    html! {
        div class=(class) {
            div class="spinner" {}
            p { "Loading cars..." }
        }
    }
}

fn error_banner(error: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = error {
            div class="error-message" role="alert" {
                p { "⚠️ " (message) }
            }
        }
    }
}
