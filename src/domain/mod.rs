//! Catalog, booking wizard and pricing. Nothing in here touches the UI.

pub mod app_state;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod entities;
pub mod pricing;

pub use app_state::AppState;
#[allow(unused_imports)]
pub use booking::{
    apply, reduce, step, Action, BookingEvent, BookingReference, BookingSession, TransitionError,
    WizardStep,
};
#[allow(unused_imports)]
pub use catalog::{filter_vehicles, find_vehicle, CatalogQuery, CategoryFilter, CATALOG};
pub use config::StoreConfig;
#[allow(unused_imports)]
pub use entities::{
    Category, DriverDetails, DriverField, Extra, FuelKind, Transmission, Vehicle, VehicleId,
};
#[allow(unused_imports)]
pub use pricing::{calculate_total, quote, rental_days, tax_on, Quote};
