use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsPost::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsPost::Id))
                    .col(string(NewsPost::Title))
                    .col(text(NewsPost::Body))
                    .col(boolean(NewsPost::Published))
                    .col(timestamp_with_time_zone_null(NewsPost::PublishedAt))
                    .col(timestamp_with_time_zone(NewsPost::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsPost {
    Table,
    Id,
    Title,
    Body,
    Published,
    PublishedAt,
    CreatedAt,
}
