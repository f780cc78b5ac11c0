pub mod browse;
pub mod confirmation;
pub mod details;

pub use browse::BrowsePage;
pub use confirmation::ConfirmationPage;
pub use details::DetailsPage;
