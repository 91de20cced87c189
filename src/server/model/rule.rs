use chrono::{DateTime, Utc};

use crate::model::rule::{CreateRuleDto, RuleDto, UpdateRuleDto};

/// Server rule shown on the public rules page, ordered within its category.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub id: i32,
    pub category: String,
    pub content: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rule {
    pub fn from_entity(entity: entity::rule::Model) -> Self {
        Self {
            id: entity.id,
            category: entity.category,
            content: entity.content,
            position: entity.position,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> RuleDto {
        RuleDto {
            id: self.id,
            category: self.category,
            content: self.content,
            position: self.position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRuleParams {
    pub category: String,
    pub content: String,
    pub position: i32,
}

impl CreateRuleParams {
    pub fn from_dto(dto: CreateRuleDto) -> Self {
        Self {
            category: dto.category,
            content: dto.content,
            position: dto.position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRuleParams {
    pub id: i32,
    pub category: String,
    pub content: String,
    pub position: i32,
}

impl UpdateRuleParams {
    pub fn from_dto(id: i32, dto: UpdateRuleDto) -> Self {
        Self {
            id,
            category: dto.category,
            content: dto.content,
            position: dto.position,
        }
    }
}
