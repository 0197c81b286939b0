//! Service listings: read-only catalogue of what the shop offers.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::ServiceListing;
pub use repository::{ListingRepository, SeaOrmListingRepository};
pub use service::ListingService;
