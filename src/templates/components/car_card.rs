use crate::domain::Listing;
use crate::format::{format_mileage, format_price, format_score};
use maud::{html, Markup};

/// One listing as a card. Pure: the same listing always renders the same markup.
pub fn car_card(car: &Listing) -> Markup {
    let title = car.title();

    html! {
        div class="car-card" {
            div class="car-image" {
                img src=(car.image_src()) alt=(title) loading="lazy";
                div class="score-badge" {
                    span class="score-value" { (format_score(car.score)) }
                    span class="score-label" { "/10" }
                }
            }
            div class="car-details" {
                h3 class="car-title" { (title) }
                @if let Some(location) = car.location() {
                    p class="car-location" { "📍 " (location) }
                }
                div class="car-stats" {
                    div class="stat" {
                        span class="stat-label" { "Price" }
                        span class="stat-value price" { (format_price(car.price)) }
                    }
                    div class="stat" {
                        span class="stat-label" { "Mileage" }
                        span class="stat-value" { (format_mileage(car.mileage)) " mi" }
                    }
                }
                @if let Some(description) = car.description() {
                    p class="car-description" { (description) }
                }
            }
        }
    }
}
