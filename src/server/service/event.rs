use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::{validation::ValidationError, AppError},
    model::event::{CreateEventParams, Event, UpdateEventParams},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets published events that have not started yet, soonest first.
    pub async fn get_upcoming(&self) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);
        let events = repo.get_published_upcoming(Utc::now()).await?;
        Ok(events)
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);
        let events = repo.get_all().await?;
        Ok(events)
    }

    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        if params.title.is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }

        let repo = EventRepository::new(self.db);
        let event = repo.create(params).await?;
        Ok(event)
    }

    pub async fn update(&self, params: UpdateEventParams) -> Result<Option<Event>, AppError> {
        if params.title.is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }

        let repo = EventRepository::new(self.db);
        let event = repo.update(params).await?;
        Ok(event)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = EventRepository::new(self.db);
        let deleted = repo.delete(id).await?;
        Ok(deleted)
    }
}
