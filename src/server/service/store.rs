use sea_orm::DatabaseConnection;

use crate::server::{
    data::store_item::StoreItemRepository,
    error::{validation::ValidationError, AppError},
    model::store::{CreateStoreItemParams, StoreItem, UpdateStoreItemParams},
};

pub struct StoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_available(&self) -> Result<Vec<StoreItem>, AppError> {
        let repo = StoreItemRepository::new(self.db);
        let items = repo.get_available().await?;
        Ok(items)
    }

    pub async fn get_all(&self) -> Result<Vec<StoreItem>, AppError> {
        let repo = StoreItemRepository::new(self.db);
        let items = repo.get_all().await?;
        Ok(items)
    }

    pub async fn create(&self, params: CreateStoreItemParams) -> Result<StoreItem, AppError> {
        if params.name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }

        let repo = StoreItemRepository::new(self.db);
        let item = repo.create(params).await?;
        Ok(item)
    }

    pub async fn update(&self, params: UpdateStoreItemParams) -> Result<Option<StoreItem>, AppError> {
        if params.name.is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }

        let repo = StoreItemRepository::new(self.db);
        let item = repo.update(params).await?;
        Ok(item)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = StoreItemRepository::new(self.db);
        let deleted = repo.delete(id).await?;
        Ok(deleted)
    }
}
