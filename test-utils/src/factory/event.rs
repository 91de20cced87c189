use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// Defaults to a published event starting one day from now.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    location: Option<String>,
    starts_at: chrono::DateTime<Utc>,
    published: bool,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Event {}", id),
            description: "A community event".to_string(),
            location: None,
            starts_at: Utc::now() + Duration::days(1),
            published: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn starts_at(mut self, starts_at: chrono::DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            location: ActiveValue::Set(self.location),
            starts_at: ActiveValue::Set(self.starts_at),
            published: ActiveValue::Set(self.published),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published upcoming event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
