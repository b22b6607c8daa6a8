// templates/pages/home.rs

use crate::filter_form::FilterForm;
use crate::shell::ShellState;
use crate::templates::{
    components::{filter_form, results_section},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(form: &FilterForm, state: &ShellState) -> Markup {
    desktop_layout(
        "DriveScope",
        html! {
            main class="main" {
                (search_app(form, state))
            }
        },
    )
}

/// Form plus results; the unit htmx swaps on Reset.
pub fn search_app(form: &FilterForm, state: &ShellState) -> Markup {
    html! {
        div class="container" id="search-app" {
            (filter_form(form))
            (results_section(state))
        }
    }
}
