use dioxus::prelude::*;

use crate::{
    domain::{BookingSession, Quote, StoreConfig},
    ui::theme,
    util::{assets::vehicle_image_uri, dates::short_or},
};

/// Side panel of the details step: the chosen car, the trip and the bill.
#[component]
pub fn BookingSummary(
    session: BookingSession,
    quote: Quote,
    config: StoreConfig,
    on_checkout: EventHandler<()>,
) -> Element {
    let Some(vehicle) = session.vehicle else {
        return rsx! { Fragment {} };
    };
    let image = vehicle_image_uri(vehicle.image);
    let duration = quote
        .rental_days
        .map(|days| format!("{days} days"))
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        aside { class: "{theme::card()} summary",
            h3 { class: "card-title", "Booking Summary" }
            div { class: "summary-vehicle",
                img { class: "summary-thumb", src: "{image}", alt: "{vehicle.name}" }
                div {
                    h4 { "{vehicle.name}" }
                    p { class: "{theme::text_muted()}", "{vehicle.category}" }
                }
            }
            hr {}
            SummaryLine { label: "Pickup:", value: short_or(session.pickup_date, "Not selected") }
            SummaryLine { label: "Return:", value: short_or(session.return_date, "Not selected") }
            SummaryLine { label: "Duration:", value: duration }
            hr {}
            SummaryLine { label: "Car rental:", value: config.format_amount(quote.rental) }
            if !session.extras.is_empty() {
                SummaryLine { label: "Extras:", value: config.format_amount(quote.extras) }
                SummaryLine { label: "Subtotal:", value: config.format_amount(quote.subtotal()) }
            }
            SummaryLine { label: "Taxes & fees:", value: config.format_amount(quote.tax) }
            hr {}
            div { class: "summary-line summary-total",
                span { "Total:" }
                span { "{config.format_amount(quote.total)}" }
            }
            button {
                class: "{theme::button_block(theme::Variant::Primary)} btn-large",
                onclick: move |_| on_checkout.call(()),
                "🛡 Secure Checkout"
            }
            p { class: "summary-note {theme::text_muted()}",
                "Your payment information is secure and encrypted"
            }
        }
    }
}

#[component]
fn SummaryLine(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "summary-line",
            span { "{label}" }
            span { "{value}" }
        }
    }
}
