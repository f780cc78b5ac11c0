use dioxus::prelude::*;

use crate::{
    app::dispatch,
    domain::{Action, AppState},
    ui::theme::{self, Variant},
    util::dates::short_or,
};

#[component]
pub fn ConfirmationPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let (session, quote, config) =
        state.with(|st| (st.session.clone(), st.quote(), st.config.clone()));

    let Some(vehicle) = session.vehicle else {
        return rsx! { Fragment {} };
    };
    let reference = session
        .reference
        .as_ref()
        .map(|reference| reference.as_str().to_string())
        .unwrap_or_default();
    let extras = session
        .extras
        .iter()
        .map(|extra| extra.label())
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        section { class: "container-narrow confirmation",
            div { class: "{theme::card()} confirmation-card",
                div { class: "confirmation-check", "✓" }
                h2 { "Booking Confirmed!" }
                p { class: "{theme::text_muted()}",
                    "Your reservation for the {vehicle.name} has been successfully confirmed."
                }
                div { class: "confirmation-details",
                    h3 { "Booking Reference: #{reference}" }
                    DetailLine { label: "Vehicle:", value: vehicle.name.to_string() }
                    if let Some(driver) = session.driver.full_name() {
                        DetailLine { label: "Driver:", value: driver }
                    }
                    DetailLine { label: "Pickup Date:", value: short_or(session.pickup_date, "N/A") }
                    DetailLine { label: "Return Date:", value: short_or(session.return_date, "N/A") }
                    if !extras.is_empty() {
                        DetailLine { label: "Extras:", value: extras }
                    }
                    div { class: "summary-line summary-total",
                        span { "Total Amount:" }
                        span { "{config.format_amount(quote.total)}" }
                    }
                }
                div { class: "confirmation-actions",
                    button {
                        class: "{theme::button(Variant::Primary)}",
                        onclick: move |_| dispatch(state, Action::Reset),
                        "Book Another Car"
                    }
                    button { class: "{theme::button(Variant::Outline)}", "View Booking Details" }
                }
                p { class: "{theme::text_muted()}",
                    "A confirmation email has been sent to your email address with all the details."
                }
            }
        }
    }
}

#[component]
fn DetailLine(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "summary-line",
            span { "{label}" }
            span { "{value}" }
        }
    }
}
