use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde_json::Value;
use uuid::Uuid;

use super::domain::{Booking, NewBooking, UpdateAck};
use crate::errors::ServiceError;
use crate::ids::new_id;
use crate::query::BookingFilter;
use models::booking;

/// Persistence for bookings. The store assigns identifiers on insert.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, booking: NewBooking) -> Result<Uuid, ServiceError>;
    async fn find(&self, filter: &BookingFilter) -> Result<Vec<Booking>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<u64, ServiceError>;
    async fn set_status(&self, id: Uuid, status: &str) -> Result<UpdateAck, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmBookingRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn insert(&self, new: NewBooking) -> Result<Uuid, ServiceError> {
        let booking = new.into_booking(new_id());
        let am = booking::ActiveModel {
            id: Set(booking.id),
            email: Set(booking.email),
            status: Set(booking.status),
            extra: Set(Value::Object(booking.extra)),
            created_at: Set(Utc::now().into()),
        };
        let inserted = am.insert(&self.db).await?;
        Ok(inserted.id)
    }

    async fn find(&self, filter: &BookingFilter) -> Result<Vec<Booking>, ServiceError> {
        let mut select = booking::Entity::find();
        if let Some(email) = filter.email.as_deref() {
            select = select.filter(booking::Column::Email.eq(email));
        }
        let rows = select.order_by_asc(booking::Column::CreatedAt).all(&self.db).await?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, ServiceError> {
        let res = booking::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    async fn set_status(&self, id: Uuid, status: &str) -> Result<UpdateAck, ServiceError> {
        // Single conditional UPDATE; only a miss needs the existence check.
        let res = booking::Entity::update_many()
            .col_expr(booking::Column::Status, Expr::value(status))
            .filter(booking::Column::Id.eq(id))
            .filter(booking::Column::Status.ne(status))
            .exec(&self.db)
            .await?;
        if res.rows_affected > 0 {
            return Ok(UpdateAck::new(1, res.rows_affected));
        }
        let exists = booking::Entity::find_by_id(id).count(&self.db).await? > 0;
        Ok(UpdateAck::new(u64::from(exists), 0))
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    /// Keeps insertion order, like the SeaORM implementation's `created_at` sort.
    #[derive(Default)]
    pub struct InMemoryBookingRepository {
        rows: RwLock<Vec<Booking>>,
    }

    #[async_trait]
    impl BookingRepository for InMemoryBookingRepository {
        async fn insert(&self, new: NewBooking) -> Result<Uuid, ServiceError> {
            let booking = new.into_booking(new_id());
            let id = booking.id;
            self.rows.write().await.push(booking);
            Ok(id)
        }

        async fn find(&self, filter: &BookingFilter) -> Result<Vec<Booking>, ServiceError> {
            let rows = self.rows.read().await;
            Ok(rows.iter().filter(|b| filter.matches(&b.email)).cloned().collect())
        }

        async fn delete(&self, id: Uuid) -> Result<u64, ServiceError> {
            let mut rows = self.rows.write().await;
            let before = rows.len();
            rows.retain(|b| b.id != id);
            Ok((before - rows.len()) as u64)
        }

        async fn set_status(&self, id: Uuid, status: &str) -> Result<UpdateAck, ServiceError> {
            let mut rows = self.rows.write().await;
            match rows.iter_mut().find(|b| b.id == id) {
                None => Ok(UpdateAck::new(0, 0)),
                Some(b) if b.status == status => Ok(UpdateAck::new(1, 0)),
                Some(b) => {
                    b.status = status.to_string();
                    Ok(UpdateAck::new(1, 1))
                }
            }
        }
    }
}
