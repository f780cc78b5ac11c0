use std::{fmt, str::FromStr};

/// Identifier of a vehicle in the embedded catalog.
pub type VehicleId = &'static str;

/// Vehicle class used by the category filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Economy,
    Luxury,
    Suv,
    Sports,
    Electric,
}

impl Category {
    /// Order matches the category dropdown.
    pub const ALL: [Category; 5] = [
        Category::Economy,
        Category::Luxury,
        Category::Suv,
        Category::Sports,
        Category::Electric,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Economy => "Economy",
            Category::Luxury => "Luxury",
            Category::Suv => "SUV",
            Category::Sports => "Sports",
            Category::Electric => "Electric",
        }
    }

    /// Lowercase value used by the dropdown.
    pub fn value(&self) -> &'static str {
        match self {
            Category::Economy => "economy",
            Category::Luxury => "luxury",
            Category::Suv => "suv",
            Category::Sports => "sports",
            Category::Electric => "electric",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown vehicle category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transmission {
    Automatic,
    Manual,
}

impl Transmission {
    pub fn label(&self) -> &'static str {
        match self {
            Transmission::Automatic => "Automatic",
            Transmission::Manual => "Manual",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FuelKind {
    Gasoline,
    Electric,
}

impl FuelKind {
    pub fn label(&self) -> &'static str {
        match self {
            FuelKind::Gasoline => "Gasoline",
            FuelKind::Electric => "Electric",
        }
    }
}

/// A rentable vehicle. Records are embedded at build time and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: &'static str,
    pub category: Category,
    /// Asset path, e.g. `/bmw.jpg`. Resolved against the embedded assets.
    pub image: &'static str,
    /// Price per rental day in the store currency unit.
    pub price_per_day: i64,
    pub available: bool,
    /// 0.0 to 5.0.
    pub rating: f32,
    pub reviews: u32,
    pub features: &'static [&'static str],
    pub transmission: Transmission,
    pub fuel: FuelKind,
    pub seats: u8,
}

impl Vehicle {
    /// Features shown on the card, plus how many were left out.
    pub fn feature_preview(&self, shown: usize) -> (&'static [&'static str], usize) {
        let features = self.features;
        let cut = shown.min(features.len());
        (&features[..cut], features.len() - cut)
    }
}

/// Optional add-on booked together with a vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Extra {
    GpsNavigation,
    ChildSeat,
    AdditionalDriver,
    FullInsurance,
}

impl Extra {
    pub const ALL: [Extra; 4] = [
        Extra::GpsNavigation,
        Extra::ChildSeat,
        Extra::AdditionalDriver,
        Extra::FullInsurance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Extra::GpsNavigation => "GPS Navigation",
            Extra::ChildSeat => "Child Safety Seat",
            Extra::AdditionalDriver => "Additional Driver",
            Extra::FullInsurance => "Full Insurance Coverage",
        }
    }
}

/// Fields of the driver details form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverField {
    FirstName,
    LastName,
    Email,
    Phone,
    License,
}

/// Free text entered on the details step. Nothing here is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license: String,
}

impl DriverDetails {
    pub fn get(&self, field: DriverField) -> &str {
        match field {
            DriverField::FirstName => &self.first_name,
            DriverField::LastName => &self.last_name,
            DriverField::Email => &self.email,
            DriverField::Phone => &self.phone,
            DriverField::License => &self.license,
        }
    }

    pub fn set(&mut self, field: DriverField, value: String) {
        let slot = match field {
            DriverField::FirstName => &mut self.first_name,
            DriverField::LastName => &mut self.last_name,
            DriverField::Email => &mut self.email,
            DriverField::Phone => &mut self.phone,
            DriverField::License => &mut self.license,
        };
        *slot = value;
    }

    pub fn full_name(&self) -> Option<String> {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("suv".parse::<Category>(), Ok(Category::Suv));
        assert_eq!(" Luxury ".parse::<Category>(), Ok(Category::Luxury));
        assert_eq!("ELECTRIC".parse::<Category>(), Ok(Category::Electric));
        assert!("truck".parse::<Category>().is_err());
    }

    #[test]
    fn driver_details_round_trip_fields() {
        let mut details = DriverDetails::default();
        details.set(DriverField::Email, "john@example.com".into());
        details.set(DriverField::FirstName, "John".into());
        assert_eq!(details.get(DriverField::Email), "john@example.com");
        assert_eq!(details.full_name().as_deref(), Some("John"));

        details.set(DriverField::FirstName, String::new());
        assert_eq!(details.full_name(), None);
    }

    fn tesla() -> Vehicle {
        crate::domain::catalog::CATALOG[0].clone()
    }

    #[test]
    fn feature_preview_shows_first_two_and_counts_rest() {
        let vehicle = tesla();
        let (shown, more) = vehicle.feature_preview(2);
        assert_eq!(shown, ["Autopilot", "Premium Audio"]);
        assert_eq!(more, 1);
    }

    #[test]
    fn feature_preview_past_the_end_shows_everything() {
        let vehicle = tesla();
        let (shown, more) = vehicle.feature_preview(10);
        assert_eq!(shown.len(), vehicle.features.len());
        assert_eq!(more, 0);
    }

    #[test]
    fn feature_preview_of_featureless_vehicle_is_empty() {
        let vehicle = Vehicle {
            features: &[],
            ..tesla()
        };
        let (shown, more) = vehicle.feature_preview(2);
        assert!(shown.is_empty());
        assert_eq!(more, 0);
    }
}
