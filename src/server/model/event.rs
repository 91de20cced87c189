use chrono::{DateTime, Utc};

use crate::model::event::{CreateEventDto, EventDto, UpdateEventDto};

/// Community event; only published events with a future start time appear on
/// the public calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            starts_at: entity.starts_at,
            published: entity.published,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            starts_at: self.starts_at,
            published: self.published,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub published: bool,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            location: dto.location,
            starts_at: dto.starts_at,
            published: dto.published,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEventParams {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub published: bool,
}

impl UpdateEventParams {
    pub fn from_dto(id: i32, dto: UpdateEventDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            location: dto.location,
            starts_at: dto.starts_at,
            published: dto.published,
        }
    }
}
