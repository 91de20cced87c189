use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoreItem::Table)
                    .if_not_exists()
                    .col(pk_auto(StoreItem::Id))
                    .col(string(StoreItem::Name))
                    .col(text(StoreItem::Description))
                    .col(string(StoreItem::Category))
                    .col(integer(StoreItem::PriceCents))
                    .col(boolean(StoreItem::Available))
                    .col(timestamp_with_time_zone(StoreItem::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoreItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoreItem {
    Table,
    Id,
    Name,
    Description,
    Category,
    PriceCents,
    Available,
    CreatedAt,
}
