use dioxus::prelude::*;

use crate::ui::theme::{self, Variant};

#[component]
pub fn AvailabilityBadge(available: bool) -> Element {
    let (label, variant) = if available {
        ("Available", Variant::Primary)
    } else {
        ("Unavailable", Variant::Secondary)
    };

    rsx! {
        span { class: "{theme::badge(variant)}", "{label}" }
    }
}
