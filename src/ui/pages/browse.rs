use dioxus::prelude::*;

use crate::{
    app::dispatch,
    domain::{find_vehicle, Action, AppState, VehicleId},
    ui::components::{filter_bar::FilterBar, search_panel::SearchPanel, vehicle_card::VehicleCard},
};

#[component]
pub fn BrowsePage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let vehicles = state.with(|st| st.visible_vehicles());
    let currency_label = state.with(|st| st.config.currency_label);

    let on_book = move |id: VehicleId| {
        let Some(vehicle) = find_vehicle(id) else {
            tracing::warn!(vehicle = id, "book requested for unknown vehicle");
            return;
        };
        dispatch(state, Action::SelectVehicle(vehicle));
    };

    rsx! {
        section { class: "hero",
            div { class: "hero-copy",
                h1 { "Find Your Perfect" span { class: "accent", " Ride" } }
                p {
                    "Book premium cars for your next adventure. Easy booking, competitive prices, and exceptional service."
                }
            }
            SearchPanel {}
        }
        section { class: "container",
            FilterBar { visible: vehicles.len() }
        }
        section { class: "container-wide",
            div { class: "vehicle-grid",
                for vehicle in vehicles {
                    VehicleCard {
                        key: "{vehicle.id}",
                        vehicle,
                        currency_label,
                        on_book,
                    }
                }
            }
        }
    }
}
