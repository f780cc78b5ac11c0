use dioxus::prelude::*;
use time::Date;

use crate::{
    app::dispatch,
    domain::{Action, AppState, BookingEvent},
    ui::{
        components::toast::{announce, ToastMessage},
        theme,
    },
    util::dates::{format_long, input_value, parse_input},
};

/// Locations and dates of the trip, shown above the fleet.
#[component]
pub fn SearchPanel() -> Element {
    let state = use_context::<Signal<AppState>>();
    let session = state.with(|st| st.session.clone());

    rsx! {
        div { class: "{theme::card()} search-panel",
            div { class: "search-grid",
                LocationField {
                    id: "pickup-location",
                    caption: "Pickup Location",
                    value: session.pickup_location.clone(),
                    on_change: move |value: String| dispatch(state, Action::SetPickupLocation(value)),
                }
                LocationField {
                    id: "return-location",
                    caption: "Return Location",
                    value: session.return_location.clone(),
                    on_change: move |value: String| dispatch(state, Action::SetReturnLocation(value)),
                }
                DateField {
                    id: "pickup-date",
                    caption: "Pickup Date",
                    value: session.pickup_date,
                    on_change: move |date: Option<Date>| dispatch(state, Action::SetPickupDate(date)),
                }
                DateField {
                    id: "return-date",
                    caption: "Return Date",
                    value: session.return_date,
                    on_change: move |date: Option<Date>| dispatch(state, Action::SetReturnDate(date)),
                }
            }
        }
    }
}

#[component]
fn LocationField(
    id: &'static str,
    caption: &'static str,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            label { class: "{theme::label_class()}", r#for: id, "{caption}" }
            div { class: "input-wrap",
                span { class: "input-glyph", "📍" }
                input {
                    id: id,
                    class: "{theme::input_with_icon()}",
                    placeholder: "Enter city or airport",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_change.call(evt.value()),
                }
            }
        }
    }
}

#[component]
fn DateField(
    id: &'static str,
    caption: &'static str,
    value: Option<Date>,
    on_change: EventHandler<Option<Date>>,
) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let shown = value.map(format_long).unwrap_or_else(|| "Select date".to_string());

    rsx! {
        div { class: "field",
            label { class: "{theme::label_class()}", r#for: id, "{caption}" }
            input {
                id: id,
                r#type: "date",
                class: "{theme::input_class()}",
                value: "{input_value(value)}",
                onchange: move |evt: FormEvent| match parse_input(&evt.value()) {
                    Ok(date) => on_change.call(date),
                    Err(err) => {
                        tracing::warn!(field = id, "rejected date input: {err}");
                        announce(
                            toasts,
                            &BookingEvent::DateRejected {
                                field: caption,
                                reason: err.to_string(),
                            },
                        );
                    }
                },
            }
            p { class: "field-caption {theme::text_muted()}", "📅 {shown}" }
        }
    }
}
