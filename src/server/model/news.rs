use chrono::{DateTime, Utc};

use crate::model::news::{CreateNewsPostDto, NewsPostDto, UpdateNewsPostDto};

/// News post. `published_at` is set on the transition to published and
/// cleared when the post is unpublished.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsPost {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl NewsPost {
    pub fn from_entity(entity: entity::news_post::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            published: entity.published,
            published_at: entity.published_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NewsPostDto {
        NewsPostDto {
            id: self.id,
            title: self.title,
            body: self.body,
            published: self.published,
            published_at: self.published_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNewsPostParams {
    pub title: String,
    pub body: String,
    pub published: bool,
}

impl CreateNewsPostParams {
    pub fn from_dto(dto: CreateNewsPostDto) -> Self {
        Self {
            title: dto.title,
            body: dto.body,
            published: dto.published,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateNewsPostParams {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub published: bool,
}

impl UpdateNewsPostParams {
    pub fn from_dto(id: i32, dto: UpdateNewsPostDto) -> Self {
        Self {
            id,
            title: dto.title,
            body: dto.body,
            published: dto.published,
        }
    }
}
