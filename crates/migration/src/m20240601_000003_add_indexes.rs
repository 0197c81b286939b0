use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Bookings: owner lookups
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bookings_email")
                    .table(Bookings::Table)
                    .col(Bookings::Email)
                    .to_owned(),
            )
            .await?;

        // Services: price ordering
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_services_price")
                    .table(Services::Table)
                    .col(Services::Price)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_bookings_email").table(Bookings::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_services_price").table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Email,
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Price,
}
