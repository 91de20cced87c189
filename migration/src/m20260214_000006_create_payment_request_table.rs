use sea_orm_migration::{prelude::*, schema::*};

use super::m20260214_000005_create_store_item_table::StoreItem;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentRequest::Id))
                    .col(integer(PaymentRequest::StoreItemId))
                    .col(string(PaymentRequest::PlayerName))
                    .col(string(PaymentRequest::Contact))
                    .col(text_null(PaymentRequest::Note))
                    .col(string(PaymentRequest::Status))
                    .col(timestamp_with_time_zone(PaymentRequest::CreatedAt))
                    .col(timestamp_with_time_zone(PaymentRequest::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_request_store_item")
                            .from(PaymentRequest::Table, PaymentRequest::StoreItemId)
                            .to(StoreItem::Table, StoreItem::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentRequest {
    Table,
    Id,
    StoreItemId,
    PlayerName,
    Contact,
    Note,
    Status,
    CreatedAt,
    UpdatedAt,
}
