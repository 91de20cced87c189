use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rule::Table)
                    .if_not_exists()
                    .col(pk_auto(Rule::Id))
                    .col(string(Rule::Category))
                    .col(text(Rule::Content))
                    .col(integer(Rule::Position))
                    .col(timestamp_with_time_zone(Rule::CreatedAt))
                    .col(timestamp_with_time_zone(Rule::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rule {
    Table,
    Id,
    Category,
    Content,
    Position,
    CreatedAt,
    UpdatedAt,
}
