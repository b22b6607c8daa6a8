use crate::domain::{FilterField, FilterValue};
use crate::filter_form::FilterForm;
use maud::{html, Markup};

struct FieldSpec {
    field: FilterField,
    label: &'static str,
    placeholder: &'static str,
}

const FIELDS: [FieldSpec; 9] = [
    FieldSpec { field: FilterField::Make, label: "Make", placeholder: "e.g., Toyota" },
    FieldSpec { field: FilterField::Model, label: "Model", placeholder: "e.g., Camry" },
    FieldSpec { field: FilterField::MinYear, label: "Min Year", placeholder: "2015" },
    FieldSpec { field: FilterField::MaxYear, label: "Max Year", placeholder: "2024" },
    FieldSpec { field: FilterField::MinPrice, label: "Min Price ($)", placeholder: "10000" },
    FieldSpec { field: FilterField::MaxPrice, label: "Max Price ($)", placeholder: "50000" },
    FieldSpec { field: FilterField::MaxMileage, label: "Max Mileage", placeholder: "100000" },
    FieldSpec { field: FilterField::MinScore, label: "Min Score", placeholder: "7.0" },
    FieldSpec { field: FilterField::Location, label: "Location", placeholder: "e.g., Los Angeles" },
];

/// The search filter panel.
///
/// Plain GET form so it works without scripts; with htmx, Search swaps only the
/// results and Reset swaps the whole app section so every input clears. Both
/// mark `#results` as in flight, which hides the current grid until the swap.
pub fn filter_form(form: &FilterForm) -> Markup {
    html! {
        form
            class="search-bar"
            method="get"
            action="/search"
            hx-get="/search"
            hx-target="#results"
            hx-swap="outerHTML"
            hx-indicator="#results, #search-indicator"
        {
            h2 { "Search Filters" }
            div class="filters-grid" {
                @for spec in &FIELDS {
                    (filter_input(form, spec))
                }
            }

            div class="search-actions" {
                button type="submit" class="btn btn-primary" { "Search" }
                button
                    type="submit"
                    class="btn btn-secondary"
                    formaction="/reset"
                    hx-get="/reset"
                    hx-target="#search-app"
                    hx-swap="outerHTML"
                {
                    "Reset"
                }
                span id="search-indicator" class="htmx-indicator spinner" aria-hidden="true" {}
            }
        }
    }
}

fn filter_input(form: &FilterForm, spec: &FieldSpec) -> Markup {
    let name = spec.field.name();
    let value = display_value(form.filters().value(spec.field));
    let is_score = spec.field == FilterField::MinScore;

    html! {
        div class="filter-group" {
            label for=(name) { (spec.label) }
            @if is_score {
                input type="number" id=(name) name=(name) step="0.1" min="0" max="10"
                    value=(value) placeholder=(spec.placeholder);
            } @else if spec.field.is_numeric() {
                input type="number" id=(name) name=(name) value=(value) placeholder=(spec.placeholder);
            } @else {
                input type="text" id=(name) name=(name) value=(value) placeholder=(spec.placeholder);
            }
        }
    }
}

// Zero and NaN show as an empty input, the same as an unset field.
fn display_value(value: Option<FilterValue>) -> String {
    match value {
        Some(FilterValue::Text(text)) => text,
        Some(FilterValue::Number(n)) if n != 0.0 && !n.is_nan() => n.to_string(),
        _ => String::new(),
    }
}
