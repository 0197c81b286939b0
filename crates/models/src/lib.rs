pub mod db;
pub mod service_listing;
pub mod booking;
