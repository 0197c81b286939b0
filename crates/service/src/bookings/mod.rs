//! Bookings: customer requests for a service, owned by a self-asserted email.
//!
//! Create, delete and status updates are keyed by id alone; no ownership
//! check is made on those paths.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{Booking, DeleteAck, InsertAck, NewBooking, StatusUpdate, UpdateAck};
pub use repository::{BookingRepository, SeaOrmBookingRepository};
pub use service::BookingService;
