use dioxus::prelude::*;

use crate::domain::AppState;
use crate::ui::theme::{self, Variant};
use crate::util::version::version_label;

const NAV_LINKS: [&str; 4] = ["Home", "Cars", "About", "Contact"];
const SERVICES: [&str; 4] = ["Car Rental", "Long-term Lease", "Corporate Fleet", "Airport Pickup"];
const SUPPORT: [&str; 4] = ["Help Center", "Contact Us", "Terms of Service", "Privacy Policy"];

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let config = state.with(|st| st.config.clone());
    let step = state.with(|st| st.session.step);

    rsx! {
        div { class: "page",
            header { class: "site-header",
                div { class: "header-inner",
                    div { class: "brand",
                        span { class: "brand-mark", "🚗" }
                        span { class: "brand-name", "{config.brand}" }
                    }
                    nav { class: "site-nav",
                        for link in NAV_LINKS {
                            a { key: "{link}", href: "#", "{link}" }
                        }
                    }
                    div { class: "header-actions",
                        span { class: "step-pill {theme::text_muted()}",
                            "Step {step.number()} of 3 · {step.label()}"
                        }
                        button { class: "{theme::button(Variant::Ghost)}", "Sign In" }
                        button { class: "{theme::button(Variant::Primary)}", "Sign Up" }
                    }
                }
            }
            main { class: "site-main",
                {children}
            }
            footer { class: "site-footer",
                div { class: "footer-grid",
                    div {
                        div { class: "brand",
                            span { class: "brand-mark", "🚗" }
                            span { class: "brand-name", "{config.brand}" }
                        }
                        p { "Your trusted partner for premium car rentals worldwide." }
                    }
                    FooterColumn { title: "Services", links: SERVICES.to_vec() }
                    FooterColumn { title: "Support", links: SUPPORT.to_vec() }
                    div {
                        h3 { "Contact" }
                        p { "📞 {config.support_phone}" }
                        p { "✉️ {config.support_email}" }
                        p { "📍 {config.address}" }
                    }
                }
                hr {}
                p { class: "footer-legal",
                    "© 2024 {config.brand}. All rights reserved. · {version_label()}"
                }
            }
        }
    }
}

#[component]
fn FooterColumn(title: &'static str, links: Vec<&'static str>) -> Element {
    rsx! {
        div {
            h3 { "{title}" }
            ul {
                for link in links {
                    li { key: "{link}", a { href: "#", "{link}" } }
                }
            }
        }
    }
}
