//! Create `services` table.
//! Listings are maintained out-of-band; `details` keeps descriptive fields
//! (image, description, facilities) that the API passes through untouched.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(uuid(Services::Id).primary_key())
                    .col(text(Services::Title).not_null())
                    .col(double(Services::Price).not_null())
                    .col(json_binary(Services::Details).not_null().default(Expr::cust("'{}'::jsonb")))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Price,
    Details,
}
