use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::event::{CreateEventParams, Event, UpdateEventParams};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets published events starting at or after the given instant, soonest
    /// first. Feeds the public calendar.
    pub async fn get_published_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::Published.eq(true))
            .filter(entity::event::Column::StartsAt.gte(now))
            .order_by_asc(entity::event::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    /// Gets every event, newest start time first. Admin listing.
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Event::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            starts_at: ActiveValue::Set(params.starts_at),
            published: ActiveValue::Set(params.published),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn update(&self, params: UpdateEventParams) -> Result<Option<Event>, DbErr> {
        let Some(existing) = entity::prelude::Event::find_by_id(params.id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::event::ActiveModel = existing.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.location = ActiveValue::Set(params.location);
        active_model.starts_at = ActiveValue::Set(params.starts_at);
        active_model.published = ActiveValue::Set(params.published);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Event::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
