use chrono::{DateTime, Utc};

use crate::model::store::{CreateStoreItemDto, StoreItemDto, UpdateStoreItemDto};

/// Storefront catalog item. Unavailable items stay in the catalog for admin
/// management but are hidden from the public listing and rejected as payment
/// request targets.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i32,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl StoreItem {
    pub fn from_entity(entity: entity::store_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            category: entity.category,
            price_cents: entity.price_cents,
            available: entity.available,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> StoreItemDto {
        StoreItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            price_cents: self.price_cents,
            available: self.available,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStoreItemParams {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i32,
    pub available: bool,
}

impl CreateStoreItemParams {
    pub fn from_dto(dto: CreateStoreItemDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            category: dto.category,
            price_cents: dto.price_cents,
            available: dto.available,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateStoreItemParams {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i32,
    pub available: bool,
}

impl UpdateStoreItemParams {
    pub fn from_dto(id: i32, dto: UpdateStoreItemDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            category: dto.category,
            price_cents: dto.price_cents,
            available: dto.available,
        }
    }
}
