use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payment requests with customizable fields.
///
/// The store item must already exist; use `StoreItemFactory` or
/// `helpers::create_payment_request_with_item` to create the dependency.
pub struct PaymentRequestFactory<'a> {
    db: &'a DatabaseConnection,
    store_item_id: i32,
    player_name: String,
    contact: String,
    note: Option<String>,
    status: String,
}

impl<'a> PaymentRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, store_item_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            store_item_id,
            player_name: format!("Player {}", id),
            contact: format!("player{}@example.com", id),
            note: None,
            status: "pending".to_string(),
        }
    }

    pub fn player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = player_name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::payment_request::Model, DbErr> {
        let now = Utc::now();
        entity::payment_request::ActiveModel {
            store_item_id: ActiveValue::Set(self.store_item_id),
            player_name: ActiveValue::Set(self.player_name),
            contact: ActiveValue::Set(self.contact),
            note: ActiveValue::Set(self.note),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending payment request against an existing store item.
pub async fn create_payment_request(
    db: &DatabaseConnection,
    store_item_id: i32,
) -> Result<entity::payment_request::Model, DbErr> {
    PaymentRequestFactory::new(db, store_item_id).build().await
}
