//! Rental price calculation.
//!
//! All amounts are whole units of the store currency. Day counts are not
//! clamped: a return date before the pickup date yields a negative count and
//! a negative price.

use std::collections::BTreeSet;

use time::Date;

use super::config::StoreConfig;
use super::entities::{Extra, Vehicle};

/// Whole days between pickup and return.
pub fn rental_days(pickup: Date, return_date: Date) -> i64 {
    (return_date - pickup).whole_days()
}

/// Rental cost before extras and tax. Zero when the vehicle or a date is missing.
pub fn calculate_total(vehicle: Option<&Vehicle>, pickup: Option<Date>, return_date: Option<Date>) -> i64 {
    match (vehicle, pickup, return_date) {
        (Some(vehicle), Some(pickup), Some(return_date)) => {
            rental_days(pickup, return_date) * vehicle.price_per_day
        }
        _ => 0,
    }
}

/// `amount * rate_bps / 10_000`, rounded half up like `Math.round`.
pub fn tax_on(amount: i64, rate_bps: i64) -> i64 {
    (amount * rate_bps + 5_000).div_euclid(10_000)
}

/// Every line of the booking summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Quote {
    /// `None` until both dates are picked.
    pub rental_days: Option<i64>,
    pub rental: i64,
    pub extras: i64,
    pub tax: i64,
    pub total: i64,
}

impl Quote {
    pub fn subtotal(&self) -> i64 {
        self.rental + self.extras
    }
}

pub fn quote(
    vehicle: Option<&Vehicle>,
    pickup: Option<Date>,
    return_date: Option<Date>,
    extras: &BTreeSet<Extra>,
    config: &StoreConfig,
) -> Quote {
    let days = pickup
        .zip(return_date)
        .map(|(pickup, return_date)| rental_days(pickup, return_date));
    let rental = calculate_total(vehicle, pickup, return_date);
    let extras = match (vehicle, days) {
        (Some(_), Some(days)) => extras
            .iter()
            .map(|extra| config.extra_price_per_day(*extra) * days)
            .sum(),
        _ => 0,
    };
    let tax = tax_on(rental + extras, config.tax_rate_bps);

    Quote {
        rental_days: days,
        rental,
        extras,
        tax,
        total: rental + extras + tax,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::catalog::{find_vehicle, CATALOG};

    fn hundred_a_day() -> Vehicle {
        Vehicle {
            price_per_day: 100,
            ..CATALOG[0].clone()
        }
    }

    #[test]
    fn three_days_at_one_hundred() {
        let vehicle = hundred_a_day();
        let config = StoreConfig::default();
        let result = quote(
            Some(&vehicle),
            Some(date!(2026 - 03 - 01)),
            Some(date!(2026 - 03 - 04)),
            &BTreeSet::new(),
            &config,
        );
        assert_eq!(result.rental_days, Some(3));
        assert_eq!(result.rental, 300);
        assert_eq!(result.tax, 36);
        assert_eq!(result.total, 336);
    }

    #[test]
    fn missing_inputs_cost_nothing() {
        let vehicle = hundred_a_day();
        let day = date!(2026 - 03 - 01);
        assert_eq!(calculate_total(Some(&vehicle), None, Some(day)), 0);
        assert_eq!(calculate_total(Some(&vehicle), Some(day), None), 0);
        assert_eq!(calculate_total(None, Some(day), Some(day.next_day().unwrap())), 0);
        for vehicle in CATALOG {
            assert_eq!(calculate_total(Some(vehicle), None, None), 0);
        }
    }

    #[test]
    fn same_day_and_reversed_dates_are_not_clamped() {
        let vehicle = hundred_a_day();
        let day = date!(2026 - 03 - 10);
        assert_eq!(calculate_total(Some(&vehicle), Some(day), Some(day)), 0);
        assert_eq!(
            calculate_total(Some(&vehicle), Some(day), Some(date!(2026 - 03 - 08))),
            -200
        );
    }

    #[test]
    fn tax_rounds_half_up() {
        assert_eq!(tax_on(300, 1200), 36);
        // 9999 * 0.12 = 1199.88
        assert_eq!(tax_on(9999, 1200), 1200);
        // 125 * 0.12 = 15.0, 129 * 0.12 = 15.48, 130 * 0.12 = 15.6
        assert_eq!(tax_on(125, 1200), 15);
        assert_eq!(tax_on(129, 1200), 15);
        assert_eq!(tax_on(130, 1200), 16);
        // Math.round(-24.0) = -24, Math.round(-1.5) = -1
        assert_eq!(tax_on(-200, 1200), -24);
        assert_eq!(tax_on(-15, 1000), -1);
    }

    #[test]
    fn extras_are_charged_per_day() {
        let vehicle = find_vehicle("6").unwrap();
        let config = StoreConfig::default();
        let extras: BTreeSet<_> = [Extra::GpsNavigation, Extra::FullInsurance].into();
        let result = quote(
            Some(vehicle),
            Some(date!(2026 - 05 - 01)),
            Some(date!(2026 - 05 - 03)),
            &extras,
            &config,
        );
        assert_eq!(result.rental, 24_000);
        assert_eq!(result.extras, 40);
        assert_eq!(result.subtotal(), 24_040);
        assert_eq!(result.tax, 2_885);
        assert_eq!(result.total, 26_925);
    }

    #[test]
    fn quote_without_dates_has_no_duration() {
        let vehicle = find_vehicle("1").unwrap();
        let extras: BTreeSet<_> = [Extra::ChildSeat].into();
        let result = quote(Some(vehicle), None, None, &extras, &StoreConfig::default());
        assert_eq!(result, Quote::default());
    }
}
