//! The fleet and the browse-step filter over it.

use super::entities::{Category, FuelKind, Transmission, Vehicle};

/// Every vehicle the storefront offers, in display order.
pub static CATALOG: &[Vehicle] = &[
    Vehicle {
        id: "1",
        name: "Tesla Model 3",
        category: Category::Electric,
        image: "/Tesla_Model_3.jpg",
        price_per_day: 9999,
        available: true,
        rating: 4.9,
        reviews: 234,
        features: &["Autopilot", "Premium Audio", "Supercharging"],
        transmission: Transmission::Automatic,
        fuel: FuelKind::Electric,
        seats: 5,
    },
    Vehicle {
        id: "2",
        name: "BMW X5",
        category: Category::Suv,
        image: "/bmw.jpg",
        price_per_day: 22500,
        available: true,
        rating: 4.8,
        reviews: 189,
        features: &["All-Wheel Drive", "Leather Seats", "Navigation"],
        transmission: Transmission::Automatic,
        fuel: FuelKind::Gasoline,
        seats: 7,
    },
    Vehicle {
        id: "3",
        name: "Mercedes C-Class",
        category: Category::Luxury,
        image: "/Mercedes.jpg",
        price_per_day: 19500,
        available: true,
        rating: 4.7,
        reviews: 156,
        features: &["Premium Interior", "Advanced Safety", "Bluetooth"],
        transmission: Transmission::Automatic,
        fuel: FuelKind::Gasoline,
        seats: 5,
    },
    Vehicle {
        id: "4",
        name: "Toyota Camry",
        category: Category::Economy,
        image: "/Toyota_Camry.jpg",
        price_per_day: 19900,
        available: true,
        rating: 4.6,
        reviews: 298,
        features: &["Fuel Efficient", "Reliable", "Spacious"],
        transmission: Transmission::Automatic,
        fuel: FuelKind::Gasoline,
        seats: 5,
    },
    Vehicle {
        id: "5",
        name: "Audi A4",
        category: Category::Luxury,
        image: "/Audi_A4.jpg",
        price_per_day: 9500,
        available: false,
        rating: 4.8,
        reviews: 167,
        features: &["Quattro AWD", "Virtual Cockpit", "Premium Sound"],
        transmission: Transmission::Automatic,
        fuel: FuelKind::Gasoline,
        seats: 5,
    },
    Vehicle {
        id: "6",
        name: "Ford Mustang",
        category: Category::Sports,
        image: "/ford-mustang-shelby.jpg",
        price_per_day: 12000,
        available: true,
        rating: 4.9,
        reviews: 203,
        features: &["V8 Engine", "Sport Mode", "Premium Audio"],
        transmission: Transmission::Manual,
        fuel: FuelKind::Gasoline,
        seats: 4,
    },
];

pub fn find_vehicle(id: &str) -> Option<&'static Vehicle> {
    CATALOG.iter().find(|vehicle| vehicle.id == id)
}

/// Category selection of the browse filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parses a dropdown value. Anything unrecognised falls back to `All`.
    pub fn from_value(value: &str) -> Self {
        value
            .parse::<Category>()
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.value(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => vehicle
                .category
                .label()
                .eq_ignore_ascii_case(category.label()),
        }
    }
}

/// Current browse filter: category plus free-text search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search: String,
}

impl CatalogQuery {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.category.matches(vehicle) && matches_search(vehicle, &self.search)
    }
}

fn matches_search(vehicle: &Vehicle, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    vehicle.name.to_lowercase().contains(&needle)
        || vehicle.category.label().to_lowercase().contains(&needle)
}

/// Vehicles of `catalog` matching `query`, in catalog order.
pub fn filter_vehicles<'a>(catalog: &'a [Vehicle], query: &CatalogQuery) -> Vec<&'a Vehicle> {
    catalog.iter().filter(|vehicle| query.matches(vehicle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: &str, search: &str) -> CatalogQuery {
        CatalogQuery {
            category: CategoryFilter::from_value(category),
            search: search.to_string(),
        }
    }

    fn names(vehicles: &[&Vehicle]) -> Vec<&'static str> {
        vehicles.iter().map(|vehicle| vehicle.name).collect()
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        let result = filter_vehicles(CATALOG, &query("all", ""));
        assert_eq!(result.len(), CATALOG.len());
        assert!(result.iter().zip(CATALOG).all(|(a, b)| *a == b));
    }

    #[test]
    fn luxury_filter_keeps_luxury_only() {
        let result = filter_vehicles(CATALOG, &query("Luxury", ""));
        assert_eq!(names(&result), vec!["Mercedes C-Class", "Audi A4"]);

        let lower = filter_vehicles(CATALOG, &query("luxury", ""));
        assert_eq!(names(&lower), names(&result));
    }

    #[test]
    fn search_matches_name_or_category() {
        let by_name = filter_vehicles(CATALOG, &query("all", "tesla"));
        assert_eq!(names(&by_name), vec!["Tesla Model 3"]);

        let by_category = filter_vehicles(CATALOG, &query("all", "SUV"));
        assert_eq!(names(&by_category), vec!["BMW X5"]);

        let partial = filter_vehicles(CATALOG, &query("all", "ux"));
        assert_eq!(names(&partial), vec!["Mercedes C-Class", "Audi A4"]);
    }

    #[test]
    fn category_and_search_combine() {
        let result = filter_vehicles(CATALOG, &query("luxury", "audi"));
        assert_eq!(names(&result), vec!["Audi A4"]);

        let none = filter_vehicles(CATALOG, &query("sports", "tesla"));
        assert!(none.is_empty());
    }

    #[test]
    fn results_are_ordered_subsequences() {
        let categories = ["all", "economy", "luxury", "suv", "sports", "electric"];
        let searches = ["", "a", "m", "premium", "zzz", "E"];
        for category in categories {
            for search in searches {
                let result = filter_vehicles(CATALOG, &query(category, search));
                let positions: Vec<usize> = result
                    .iter()
                    .map(|vehicle| {
                        CATALOG
                            .iter()
                            .position(|v| v.id == vehicle.id)
                            .expect("result must come from the catalog")
                    })
                    .collect();
                assert!(
                    positions.windows(2).all(|pair| pair[0] < pair[1]),
                    "order broken for {category:?}/{search:?}"
                );
            }
        }
    }

    #[test]
    fn unknown_category_value_means_all() {
        assert_eq!(CategoryFilter::from_value("trucks"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value("suv"),
            CategoryFilter::Only(Category::Suv)
        );
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_vehicle("5").map(|v| v.name), Some("Audi A4"));
        assert!(find_vehicle("42").is_none());
    }
}
