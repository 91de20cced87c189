use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::news::{CreateNewsPostParams, NewsPost, UpdateNewsPostParams};

pub struct NewsPostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsPostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets published posts, most recently published first.
    pub async fn get_published(&self) -> Result<Vec<NewsPost>, DbErr> {
        let entities = entity::prelude::NewsPost::find()
            .filter(entity::news_post::Column::Published.eq(true))
            .order_by_desc(entity::news_post::Column::PublishedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(NewsPost::from_entity).collect())
    }

    /// Finds a post by id only if it is published. Used by the public site so
    /// drafts cannot be fetched by guessing ids.
    pub async fn find_published_by_id(&self, id: i32) -> Result<Option<NewsPost>, DbErr> {
        let entity = entity::prelude::NewsPost::find()
            .filter(entity::news_post::Column::Id.eq(id))
            .filter(entity::news_post::Column::Published.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(NewsPost::from_entity))
    }

    /// Gets every post, newest first. Admin listing.
    pub async fn get_all(&self) -> Result<Vec<NewsPost>, DbErr> {
        let entities = entity::prelude::NewsPost::find()
            .order_by_desc(entity::news_post::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(NewsPost::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<NewsPost>, DbErr> {
        let entity = entity::prelude::NewsPost::find_by_id(id).one(self.db).await?;

        Ok(entity.map(NewsPost::from_entity))
    }

    /// Creates a post. A post created as published gets its publication
    /// timestamp immediately.
    pub async fn create(&self, params: CreateNewsPostParams) -> Result<NewsPost, DbErr> {
        let now = Utc::now();
        let entity = entity::news_post::ActiveModel {
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            published: ActiveValue::Set(params.published),
            published_at: ActiveValue::Set(params.published.then_some(now)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(NewsPost::from_entity(entity))
    }

    /// Updates a post. The publication timestamp is set on the transition to
    /// published, kept on republish-without-change, and cleared on unpublish.
    pub async fn update(&self, params: UpdateNewsPostParams) -> Result<Option<NewsPost>, DbErr> {
        let Some(existing) = entity::prelude::NewsPost::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let published_at = match (existing.published, params.published) {
            (false, true) => Some(Utc::now()),
            (true, true) => existing.published_at,
            (_, false) => None,
        };

        let mut active_model: entity::news_post::ActiveModel = existing.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.body = ActiveValue::Set(params.body);
        active_model.published = ActiveValue::Set(params.published);
        active_model.published_at = ActiveValue::Set(published_at);

        let entity = active_model.update(self.db).await?;

        Ok(Some(NewsPost::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::NewsPost::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
