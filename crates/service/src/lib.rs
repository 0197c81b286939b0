//! Service layer: everything between the HTTP surface and the database.
//! - `auth`: token issuance and verification.
//! - `query`: translation of untrusted query parameters into store filters.
//! - `listings` / `bookings`: domain types, repositories, services.

pub mod errors;
pub mod ids;
pub mod auth;
pub mod query;
pub mod listings;
pub mod bookings;
