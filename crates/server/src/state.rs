use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::TokenService;
use service::bookings::{BookingRepository, BookingService, SeaOrmBookingRepository};
use service::listings::{ListingRepository, ListingService, SeaOrmListingRepository};

/// Shared, read-only per request. Cloned into every handler.
#[derive(Clone)]
pub struct ServerState {
    pub tokens: Arc<TokenService>,
    pub listings: Arc<ListingService>,
    pub bookings: Arc<BookingService>,
}

impl ServerState {
    pub fn new(
        tokens: TokenService,
        listings: Arc<dyn ListingRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            tokens: Arc::new(tokens),
            listings: Arc::new(ListingService::new(listings)),
            bookings: Arc::new(BookingService::new(bookings)),
        }
    }

    /// Both repositories share the one pooled connection.
    pub fn from_db(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self::new(
            tokens,
            Arc::new(SeaOrmListingRepository { db: db.clone() }),
            Arc::new(SeaOrmBookingRepository { db }),
        )
    }
}
