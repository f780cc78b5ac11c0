pub mod availability_badge;
pub mod booking_summary;
pub mod filter_bar;
pub mod rating;
pub mod search_panel;
pub mod toast;
pub mod vehicle_card;
