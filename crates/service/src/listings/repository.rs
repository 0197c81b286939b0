use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::ServiceListing;
use crate::errors::ServiceError;
use crate::query::{ListingFilter, PriceOrder};
use models::service_listing;

#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn find(&self, filter: &ListingFilter) -> Result<Vec<ServiceListing>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceListing>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmListingRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ListingRepository for SeaOrmListingRepository {
    async fn find(&self, filter: &ListingFilter) -> Result<Vec<ServiceListing>, ServiceError> {
        let mut select = service_listing::Entity::find();
        if let Some(pattern) = filter.like_pattern() {
            let title = Expr::col((service_listing::Entity, service_listing::Column::Title));
            select = select.filter(Expr::expr(Func::lower(title)).like(LikeExpr::new(pattern).escape('\\')));
        }
        select = match filter.order {
            PriceOrder::Ascending => select.order_by_asc(service_listing::Column::Price),
            PriceOrder::Descending => select.order_by_desc(service_listing::Column::Price),
        };
        let rows = select.all(&self.db).await?;
        Ok(rows.into_iter().map(ServiceListing::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceListing>, ServiceError> {
        let row = service_listing::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(ServiceListing::from))
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryListingRepository {
        listings: RwLock<Vec<ServiceListing>>,
    }

    impl InMemoryListingRepository {
        pub fn new(listings: Vec<ServiceListing>) -> Self {
            Self { listings: RwLock::new(listings) }
        }
    }

    #[async_trait]
    impl ListingRepository for InMemoryListingRepository {
        async fn find(&self, filter: &ListingFilter) -> Result<Vec<ServiceListing>, ServiceError> {
            let listings = self.listings.read().await;
            let mut found: Vec<ServiceListing> =
                listings.iter().filter(|l| filter.matches_title(&l.title)).cloned().collect();
            found.sort_by(|a, b| filter.order.compare(a.price, b.price));
            Ok(found)
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceListing>, ServiceError> {
            let listings = self.listings.read().await;
            Ok(listings.iter().find(|l| l.id == id).cloned())
        }
    }
}
