use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rules with customizable fields.
pub struct RuleFactory<'a> {
    db: &'a DatabaseConnection,
    category: String,
    content: String,
    position: i32,
}

impl<'a> RuleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            category: "General".to_string(),
            content: format!("Rule {}", id),
            position: id as i32,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub async fn build(self) -> Result<entity::rule::Model, DbErr> {
        let now = Utc::now();
        entity::rule::ActiveModel {
            category: ActiveValue::Set(self.category),
            content: ActiveValue::Set(self.content),
            position: ActiveValue::Set(self.position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rule with default values.
pub async fn create_rule(db: &DatabaseConnection) -> Result<entity::rule::Model, DbErr> {
    RuleFactory::new(db).build().await
}
