use super::booking::{step, Action, BookingEvent, BookingSession};
use super::catalog::{filter_vehicles, CatalogQuery, CATALOG};
use super::config::StoreConfig;
use super::entities::Vehicle;
use super::pricing::{quote, Quote};

/// Everything the page renders from. Created fresh on every launch.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub config: StoreConfig,
    pub query: CatalogQuery,
    pub session: BookingSession,
}

impl AppState {
    /// Advances the booking session, returning what the customer should hear about.
    pub fn dispatch(&mut self, action: Action) -> Option<BookingEvent> {
        let session = std::mem::take(&mut self.session);
        let (session, event) = step(session, action);
        self.session = session;
        event
    }

    pub fn visible_vehicles(&self) -> Vec<&'static Vehicle> {
        filter_vehicles(CATALOG, &self.query)
    }

    pub fn quote(&self) -> Quote {
        quote(
            self.session.vehicle,
            self.session.pickup_date,
            self.session.return_date,
            &self.session.extras,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::{catalog::find_vehicle, CategoryFilter, Category, WizardStep};

    #[test]
    fn filter_does_not_touch_catalog() {
        let mut state = AppState::default();
        state.query.category = CategoryFilter::Only(Category::Sports);
        assert_eq!(state.visible_vehicles().len(), 1);
        assert_eq!(CATALOG.len(), 6);

        state.query = CatalogQuery::default();
        assert_eq!(state.visible_vehicles().len(), 6);
    }

    #[test]
    fn quote_follows_session() {
        let mut state = AppState::default();
        assert_eq!(state.quote().total, 0);

        state.dispatch(Action::SetPickupDate(Some(date!(2026 - 07 - 01))));
        state.dispatch(Action::SetReturnDate(Some(date!(2026 - 07 - 04))));
        let mustang = find_vehicle("6").unwrap();
        state.dispatch(Action::SelectVehicle(mustang));

        assert_eq!(state.session.step, WizardStep::Details);
        let quote = state.quote();
        assert_eq!(quote.rental, 36_000);
        assert_eq!(quote.tax, 4_320);
        assert_eq!(quote.total, 40_320);
    }

    #[test]
    fn dispatch_keeps_session_on_rejected_booking() {
        let mut state = AppState::default();
        state.dispatch(Action::SetPickupLocation("Chennai Airport".into()));
        let audi = find_vehicle("5").unwrap();

        let event = state.dispatch(Action::SelectVehicle(audi));

        assert_eq!(event, Some(BookingEvent::VehicleUnavailable { vehicle: "Audi A4" }));
        assert_eq!(state.session.step, WizardStep::Browsing);
        assert_eq!(state.session.pickup_location, "Chennai Airport");
    }
}
