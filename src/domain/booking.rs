//! Booking wizard: session state and the reducer that drives it.
//!
//! The wizard only moves forward `Browsing -> Details -> Confirmed`; `Back`
//! and `Reset` bring it back to `Browsing`. Actions that are not valid in the
//! current step leave the session untouched.

use std::{collections::BTreeSet, fmt};

use thiserror::Error;
use time::Date;

use super::entities::{DriverDetails, DriverField, Extra, Vehicle, VehicleId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    Browsing = 1,
    Details = 2,
    Confirmed = 3,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Browsing => "Choose a car",
            WizardStep::Details => "Your details",
            WizardStep::Confirmed => "Confirmed",
        }
    }
}

/// Reference handed out when a booking is confirmed, e.g. `DR4K2J9QZ0A`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingReference(String);

impl BookingReference {
    pub const PREFIX: &'static str = "DR";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of one visitor's booking. Lost when the window closes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingSession {
    pub step: WizardStep,
    pub vehicle: Option<&'static Vehicle>,
    pub pickup_location: String,
    pub return_location: String,
    pub pickup_date: Option<Date>,
    pub return_date: Option<Date>,
    pub driver: DriverDetails,
    pub extras: BTreeSet<Extra>,
    /// Set once the session reaches `Confirmed`.
    pub reference: Option<BookingReference>,
}

impl BookingSession {
    pub fn vehicle_id(&self) -> Option<VehicleId> {
        self.vehicle.map(|vehicle| vehicle.id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetPickupLocation(String),
    SetReturnLocation(String),
    SetPickupDate(Option<Date>),
    SetReturnDate(Option<Date>),
    /// "Book Now" on a vehicle card.
    SelectVehicle(&'static Vehicle),
    SetDriverField(DriverField, String),
    ToggleExtra(Extra),
    /// "Secure Checkout". The reference is generated by the caller so the
    /// reducer stays deterministic.
    ConfirmDetails(BookingReference),
    /// "Back to Cars": drops the vehicle, keeps everything typed so far.
    Back,
    /// "Book Another Car": starts over.
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetPickupLocation(_) => "set_pickup_location",
            Action::SetReturnLocation(_) => "set_return_location",
            Action::SetPickupDate(_) => "set_pickup_date",
            Action::SetReturnDate(_) => "set_return_date",
            Action::SelectVehicle(_) => "select_vehicle",
            Action::SetDriverField(..) => "set_driver_field",
            Action::ToggleExtra(_) => "toggle_extra",
            Action::ConfirmDetails(_) => "confirm_details",
            Action::Back => "back",
            Action::Reset => "reset",
        }
    }
}

/// Why an action was ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("{vehicle} is not available")]
    VehicleUnavailable { vehicle: &'static str },
    #[error("{action} is not allowed while in step {step:?}")]
    WrongStep {
        action: &'static str,
        step: WizardStep,
    },
    #[error("no vehicle selected")]
    NoVehicleSelected,
}

/// Applies `action` to `session`, or explains why it does not apply.
pub fn apply(session: &BookingSession, action: Action) -> Result<BookingSession, TransitionError> {
    let mut next = session.clone();
    let wrong_step = |action: &Action| TransitionError::WrongStep {
        action: action.name(),
        step: session.step,
    };

    match action {
        Action::SetPickupLocation(value) => next.pickup_location = value,
        Action::SetReturnLocation(value) => next.return_location = value,
        Action::SetPickupDate(date) => next.pickup_date = date,
        Action::SetReturnDate(date) => next.return_date = date,
        Action::SelectVehicle(vehicle) => {
            if session.step != WizardStep::Browsing {
                return Err(wrong_step(&action));
            }
            if !vehicle.available {
                return Err(TransitionError::VehicleUnavailable {
                    vehicle: vehicle.name,
                });
            }
            next.vehicle = Some(vehicle);
            next.step = WizardStep::Details;
        }
        Action::SetDriverField(field, value) => {
            if session.step != WizardStep::Details {
                return Err(wrong_step(&Action::SetDriverField(field, value)));
            }
            next.driver.set(field, value);
        }
        Action::ToggleExtra(extra) => {
            if session.step != WizardStep::Details {
                return Err(wrong_step(&action));
            }
            if !next.extras.remove(&extra) {
                next.extras.insert(extra);
            }
        }
        Action::ConfirmDetails(reference) => {
            if session.step != WizardStep::Details {
                return Err(wrong_step(&Action::ConfirmDetails(reference)));
            }
            if session.vehicle.is_none() {
                return Err(TransitionError::NoVehicleSelected);
            }
            next.reference = Some(reference);
            next.step = WizardStep::Confirmed;
        }
        Action::Back => {
            if session.step != WizardStep::Details {
                return Err(wrong_step(&action));
            }
            next.vehicle = None;
            next.extras.clear();
            next.step = WizardStep::Browsing;
        }
        Action::Reset => next = BookingSession::default(),
    }

    Ok(next)
}

/// Something the customer is told about after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingEvent {
    VehicleUnavailable { vehicle: &'static str },
    DateRejected { field: &'static str, reason: String },
    BackToBrowsing,
    BookingConfirmed { reference: BookingReference },
    Rejected(TransitionError),
}

impl From<TransitionError> for BookingEvent {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::VehicleUnavailable { vehicle } => {
                BookingEvent::VehicleUnavailable { vehicle }
            }
            other => BookingEvent::Rejected(other),
        }
    }
}

/// Reducer used by the UI: invalid actions are logged and leave the session as is.
pub fn reduce(session: BookingSession, action: Action) -> BookingSession {
    step(session, action).0
}

/// Like [`reduce`], also reporting the event worth announcing, if any.
pub fn step(session: BookingSession, action: Action) -> (BookingSession, Option<BookingEvent>) {
    let name = action.name();
    let event = match &action {
        Action::Back => Some(BookingEvent::BackToBrowsing),
        Action::ConfirmDetails(reference) => Some(BookingEvent::BookingConfirmed {
            reference: reference.clone(),
        }),
        _ => None,
    };
    match apply(&session, action) {
        Ok(next) => {
            if next.step != session.step {
                tracing::debug!(
                    action = name,
                    from = ?session.step,
                    to = ?next.step,
                    vehicle = ?next.vehicle_id(),
                    "wizard step changed"
                );
            }
            (next, event)
        }
        Err(err) => {
            tracing::debug!(action = name, step = ?session.step, "ignored action: {err}");
            (session, Some(err.into()))
        }
    }
}
