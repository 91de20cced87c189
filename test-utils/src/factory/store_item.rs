use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test store items with customizable fields.
pub struct StoreItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    category: String,
    price_cents: i32,
    available: bool,
}

impl<'a> StoreItemFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Item {}", id),
            description: "A store item".to_string(),
            category: "Vehicles".to_string(),
            price_cents: 500,
            available: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i32) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub async fn build(self) -> Result<entity::store_item::Model, DbErr> {
        entity::store_item::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            category: ActiveValue::Set(self.category),
            price_cents: ActiveValue::Set(self.price_cents),
            available: ActiveValue::Set(self.available),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available store item with default values.
pub async fn create_store_item(db: &DatabaseConnection) -> Result<entity::store_item::Model, DbErr> {
    StoreItemFactory::new(db).build().await
}
