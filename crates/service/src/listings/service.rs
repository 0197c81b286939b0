use std::sync::Arc;

use tracing::{debug, instrument};

use super::domain::ServiceListing;
use super::repository::ListingRepository;
use crate::errors::ServiceError;
use crate::ids::parse_id;
use crate::query::{translate_listing_query, ListingQuery};

/// Read side of the service catalogue.
pub struct ListingService {
    repo: Arc<dyn ListingRepository>,
}

impl ListingService {
    pub fn new(repo: Arc<dyn ListingRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: &ListingQuery) -> Result<Vec<ServiceListing>, ServiceError> {
        let filter = translate_listing_query(query);
        let listings = self.repo.find(&filter).await?;
        debug!(count = listings.len(), "listings_found");
        Ok(listings)
    }

    /// `Ok(None)` for an unknown id; a malformed id is an `InvalidArgument`.
    #[instrument(skip(self))]
    pub async fn get(&self, raw_id: &str) -> Result<Option<ServiceListing>, ServiceError> {
        let id = parse_id(raw_id)?;
        self.repo.find_by_id(id).await
    }
}
