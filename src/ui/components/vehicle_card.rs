use dioxus::prelude::*;

use crate::{
    domain::{Vehicle, VehicleId},
    ui::{
        components::{availability_badge::AvailabilityBadge, rating::Rating},
        theme::{self, Variant},
    },
    util::assets::vehicle_image_uri,
};

/// Features listed on a card before collapsing into "+N more".
const FEATURES_SHOWN: usize = 2;

#[component]
pub fn VehicleCard(
    vehicle: &'static Vehicle,
    currency_label: &'static str,
    on_book: EventHandler<VehicleId>,
) -> Element {
    let image = vehicle_image_uri(vehicle.image);
    let (features, hidden) = vehicle.feature_preview(FEATURES_SHOWN);
    let button_label = if vehicle.available { "Book Now" } else { "Unavailable" };

    rsx! {
        article {
            class: "{theme::card_dimmed(!vehicle.available)}",
            div { class: "card-media",
                img { class: "card-image", src: "{image}", alt: "{vehicle.name}" }
                div { class: "card-media-badge",
                    AvailabilityBadge { available: vehicle.available }
                }
                div { class: "card-media-actions",
                    button { class: "{theme::icon_button()}", title: "Save", "♡" }
                    button { class: "{theme::icon_button()}", title: "Share", "⇪" }
                }
            }
            div { class: "card-body",
                div { class: "card-heading",
                    div {
                        h3 { class: "card-title", "{vehicle.name}" }
                        p { class: "{theme::text_muted()}", "{vehicle.category}" }
                    }
                    div { class: "card-price",
                        div { class: "{theme::price_text()}", "{currency_label}{vehicle.price_per_day}" }
                        div { class: "{theme::text_muted()}", "per day" }
                    }
                }
                Rating { rating: vehicle.rating, reviews: vehicle.reviews }
                div { class: "spec-grid {theme::text_muted()}",
                    span { "👥 {vehicle.seats} seats" }
                    span { "⚙ {vehicle.transmission.label()}" }
                    span { "⛽ {vehicle.fuel.label()}" }
                }
                div { class: "feature-list",
                    for feature in features.iter() {
                        span { key: "{feature}", class: "{theme::badge(Variant::Outline)}", "{feature}" }
                    }
                    if hidden > 0 {
                        span { class: "{theme::badge(Variant::Outline)}", "+{hidden} more" }
                    }
                }
                button {
                    class: "{theme::button_block(Variant::Primary)}",
                    disabled: !vehicle.available,
                    onclick: move |_| on_book.call(vehicle.id),
                    "{button_label} ›"
                }
            }
        }
    }
}
