//! Create `bookings` table.
//! `extra` holds every caller-supplied field beyond email/status.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(uuid(Bookings::Id).primary_key())
                    .col(text(Bookings::Email).not_null())
                    .col(text(Bookings::Status).not_null())
                    .col(json_binary(Bookings::Extra).not_null().default(Expr::cust("'{}'::jsonb")))
                    .col(timestamp_with_time_zone(Bookings::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bookings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    Email,
    Status,
    Extra,
    CreatedAt,
}
