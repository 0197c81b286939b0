use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Booking, DeleteAck, InsertAck, NewBooking, StatusUpdate, UpdateAck};
use super::repository::BookingRepository;
use crate::auth::AuthClaims;
use crate::errors::ServiceError;
use crate::ids::parse_id;
use crate::query::{translate_booking_query, BookingQuery};

/// Application service for bookings.
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, new), fields(email = %new.email))]
    pub async fn create(&self, new: NewBooking) -> Result<InsertAck, ServiceError> {
        let id = self.repo.insert(new).await?;
        info!(booking_id = %id, "booking_created");
        Ok(InsertAck::new(id))
    }

    /// List bookings visible to the verified caller.
    #[instrument(skip(self, claims), fields(caller = claims.email().unwrap_or("")))]
    pub async fn list(&self, claims: &AuthClaims, query: &BookingQuery) -> Result<Vec<Booking>, ServiceError> {
        let filter = translate_booking_query(claims, query)?;
        self.repo.find(&filter).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> Result<DeleteAck, ServiceError> {
        let id = parse_id(raw_id)?;
        let deleted = self.repo.delete(id).await?;
        info!(booking_id = %id, deleted, "booking_deleted");
        Ok(DeleteAck::new(deleted))
    }

    #[instrument(skip(self, update), fields(status = %update.status))]
    pub async fn update_status(&self, raw_id: &str, update: StatusUpdate) -> Result<UpdateAck, ServiceError> {
        let id = parse_id(raw_id)?;
        let ack = self.repo.set_status(id, &update.status).await?;
        info!(booking_id = %id, matched = ack.matched_count, modified = ack.modified_count, "booking_status_updated");
        Ok(ack)
    }
}
