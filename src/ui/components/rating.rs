use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn Rating(rating: f32, reviews: u32) -> Element {
    rsx! {
        div {
            class: "rating",
            span { class: "rating-star", "★" }
            span { class: "rating-value", "{rating:.1}" }
            span { class: "{theme::text_muted()}", "({reviews} reviews)" }
        }
    }
}
