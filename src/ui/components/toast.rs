//! Notices for booking events, stacked at the bottom of the window.

use std::time::Duration;

use dioxus::prelude::*;

use crate::{domain::BookingEvent, util::generate_id};

const AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl From<&BookingEvent> for ToastMessage {
    fn from(event: &BookingEvent) -> Self {
        let (kind, text) = match event {
            BookingEvent::VehicleUnavailable { vehicle } => (
                ToastKind::Warning,
                format!("{vehicle} is not available right now."),
            ),
            BookingEvent::DateRejected { field, reason } => {
                (ToastKind::Error, format!("{field}: {reason}"))
            }
            BookingEvent::BackToBrowsing => (
                ToastKind::Info,
                "Your trip dates and details are kept.".to_string(),
            ),
            BookingEvent::BookingConfirmed { reference } => (
                ToastKind::Success,
                format!("Booking #{reference} confirmed!"),
            ),
            BookingEvent::Rejected(err) => (ToastKind::Warning, err.to_string()),
        };

        Self {
            id: generate_id("toast"),
            kind,
            text,
        }
    }
}

/// Appends `message`, dropping the oldest notices beyond [`MAX_TOASTS`].
fn stack(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    let overflow = (entries.len() + 1).saturating_sub(MAX_TOASTS);
    entries.drain(..overflow);
    entries.push(message);
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|entries| entries.retain(|entry| entry.id != id));
}

/// Shows the notice for `event` and schedules its removal.
pub fn announce(mut toasts: Signal<Vec<ToastMessage>>, event: &BookingEvent) {
    let message = ToastMessage::from(event);
    let id = message.id.clone();
    toasts.with_mut(|entries| stack(entries, message));

    spawn(async move {
        tokio::time::sleep(AUTO_DISMISS).await;
        dismiss(toasts, &id);
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toast-stack",
            ul {
                for entry in entries {
                    ToastItem { key: "{entry.id}", entry }
                }
            }
        }
    }
}

#[component]
fn ToastItem(entry: ToastMessage) -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let id = entry.id.clone();

    rsx! {
        li { class: "toast {entry.kind.class()}",
            span { class: "toast-icon", "{entry.kind.icon()}" }
            p { "{entry.text}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| dismiss(toasts, &id),
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingReference;

    fn message(text: &str) -> ToastMessage {
        ToastMessage {
            id: text.to_string(),
            kind: ToastKind::Info,
            text: text.to_string(),
        }
    }

    #[test]
    fn stack_evicts_oldest_beyond_cap() {
        let mut entries = Vec::new();
        for text in ["a", "b", "c", "d", "e", "f"] {
            stack(&mut entries, message(text));
            assert!(entries.len() <= MAX_TOASTS);
        }
        let ids = entries.iter().map(|entry| entry.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["c", "d", "e", "f"]);
    }

    #[test]
    fn stack_below_cap_keeps_everything() {
        let mut entries = vec![message("a")];
        stack(&mut entries, message("b"));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].id, "b");
    }

    #[test]
    fn booking_events_map_to_notices() {
        let unavailable = ToastMessage::from(&BookingEvent::VehicleUnavailable { vehicle: "Audi A4" });
        assert_eq!(unavailable.kind, ToastKind::Warning);
        assert_eq!(unavailable.text, "Audi A4 is not available right now.");

        let confirmed = ToastMessage::from(&BookingEvent::BookingConfirmed {
            reference: BookingReference::new("DRABC123XYZ"),
        });
        assert_eq!(confirmed.kind, ToastKind::Success);
        assert_eq!(confirmed.text, "Booking #DRABC123XYZ confirmed!");

        let rejected = ToastMessage::from(&BookingEvent::DateRejected {
            field: "Pickup Date",
            reason: "bad".into(),
        });
        assert_eq!(rejected.kind, ToastKind::Error);
        assert_eq!(rejected.text, "Pickup Date: bad");
        assert_ne!(rejected.id, confirmed.id);
    }
}
