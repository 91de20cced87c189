use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::store::{CreateStoreItemParams, StoreItem, UpdateStoreItemParams};

pub struct StoreItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets items visible on the public storefront, grouped by category.
    pub async fn get_available(&self) -> Result<Vec<StoreItem>, DbErr> {
        let entities = entity::prelude::StoreItem::find()
            .filter(entity::store_item::Column::Available.eq(true))
            .order_by_asc(entity::store_item::Column::Category)
            .order_by_asc(entity::store_item::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StoreItem::from_entity).collect())
    }

    /// Gets the full catalog including unavailable items. Admin listing.
    pub async fn get_all(&self) -> Result<Vec<StoreItem>, DbErr> {
        let entities = entity::prelude::StoreItem::find()
            .order_by_asc(entity::store_item::Column::Category)
            .order_by_asc(entity::store_item::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StoreItem::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<StoreItem>, DbErr> {
        let entity = entity::prelude::StoreItem::find_by_id(id).one(self.db).await?;

        Ok(entity.map(StoreItem::from_entity))
    }

    pub async fn create(&self, params: CreateStoreItemParams) -> Result<StoreItem, DbErr> {
        let entity = entity::store_item::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            category: ActiveValue::Set(params.category),
            price_cents: ActiveValue::Set(params.price_cents),
            available: ActiveValue::Set(params.available),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StoreItem::from_entity(entity))
    }

    pub async fn update(&self, params: UpdateStoreItemParams) -> Result<Option<StoreItem>, DbErr> {
        let Some(existing) = entity::prelude::StoreItem::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::store_item::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.category = ActiveValue::Set(params.category);
        active_model.price_cents = ActiveValue::Set(params.price_cents);
        active_model.available = ActiveValue::Set(params.available);

        let entity = active_model.update(self.db).await?;

        Ok(Some(StoreItem::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StoreItem::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
