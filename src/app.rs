use dioxus::prelude::*;

use crate::{
    domain::{Action, AppState, WizardStep},
    ui::{
        components::toast::{announce, Toast, ToastMessage},
        pages::{BrowsePage, ConfirmationPage, DetailsPage},
        shell::Shell,
    },
    util::assets,
};

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let step = state.with(|st| st.session.step);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Shell {
            match step {
                WizardStep::Browsing => rsx! { BrowsePage {} },
                WizardStep::Details => rsx! { DetailsPage {} },
                WizardStep::Confirmed => rsx! { ConfirmationPage {} },
            }
        }
        Toast {}
    }
}

/// Runs `action` through the booking reducer and announces the resulting event.
pub fn dispatch(mut state: Signal<AppState>, action: Action) {
    let Some(event) = state.with_mut(|st| st.dispatch(action)) else {
        return;
    };
    match try_consume_context::<Signal<Vec<ToastMessage>>>() {
        Some(toasts) => announce(toasts, &event),
        None => tracing::warn!(?event, "no toast stack to announce booking event"),
    }
}
