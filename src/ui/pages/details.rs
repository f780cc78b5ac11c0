use dioxus::prelude::*;

use crate::{
    app::dispatch,
    domain::{Action, AppState, DriverField, Extra},
    ui::{
        components::booking_summary::BookingSummary,
        theme::{self, Variant},
    },
    util::reference::new_booking_reference,
};

const DRIVER_FIELDS: [(DriverField, &str, &str, &str, &str); 5] = [
    (DriverField::FirstName, "first-name", "First Name", "text", "John"),
    (DriverField::LastName, "last-name", "Last Name", "text", "Doe"),
    (DriverField::Email, "email", "Email", "email", "john@example.com"),
    (DriverField::Phone, "phone", "Phone Number", "tel", "+1 (555) 123-4567"),
    (DriverField::License, "license", "Driver's License Number", "text", "DL123456789"),
];

#[component]
pub fn DetailsPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let (session, quote, config) =
        state.with(|st| (st.session.clone(), st.quote(), st.config.clone()));

    let on_checkout = move |_: ()| {
        let reference = new_booking_reference();
        dispatch(state, Action::ConfirmDetails(reference));
        state.with(|st| {
            if let Some(reference) = &st.session.reference {
                let quote = st.quote();
                tracing::info!(
                    reference = %reference,
                    vehicle = ?st.session.vehicle_id(),
                    days = ?quote.rental_days,
                    total = quote.total,
                    "booking confirmed"
                );
            }
        });
    };

    rsx! {
        section { class: "container-wide details",
            div { class: "details-heading",
                button {
                    class: "{theme::button(Variant::Ghost)}",
                    onclick: move |_| dispatch(state, Action::Back),
                    "← Back to Cars"
                }
                h2 { "Complete Your Booking" }
            }
            div { class: "details-grid",
                div { class: "{theme::card()} details-form",
                    h3 { class: "card-title", "Booking Details" }
                    div { class: "form-grid",
                        for (field, id, caption, kind, placeholder) in DRIVER_FIELDS {
                            div {
                                key: "{id}",
                                class: field_class(field),
                                label { class: "{theme::label_class()}", r#for: id, "{caption}" }
                                input {
                                    id: id,
                                    r#type: kind,
                                    class: "{theme::input_class()}",
                                    placeholder: placeholder,
                                    value: "{session.driver.get(field)}",
                                    oninput: move |evt: FormEvent| {
                                        dispatch(state, Action::SetDriverField(field, evt.value()))
                                    },
                                }
                            }
                        }
                    }
                    hr {}
                    h3 { class: "section-title", "Additional Options" }
                    div { class: "extras",
                        for extra in Extra::ALL {
                            label {
                                key: "{extra.label()}",
                                class: "extra",
                                input {
                                    r#type: "checkbox",
                                    checked: session.extras.contains(&extra),
                                    onchange: move |_| dispatch(state, Action::ToggleExtra(extra)),
                                }
                                span {
                                    "{extra.label()} ({config.format_amount(config.extra_price_per_day(extra))}/day)"
                                }
                            }
                        }
                    }
                }
                BookingSummary {
                    session: session.clone(),
                    quote,
                    config: config.clone(),
                    on_checkout,
                }
            }
        }
    }
}

fn field_class(field: DriverField) -> &'static str {
    match field {
        DriverField::FirstName | DriverField::LastName => "field",
        _ => "field field-wide",
    }
}
