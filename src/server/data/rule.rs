use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::rule::{CreateRuleParams, Rule, UpdateRuleParams};

pub struct RuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all rules ordered by category, then position within the category.
    pub async fn get_all_ordered(&self) -> Result<Vec<Rule>, DbErr> {
        let entities = entity::prelude::Rule::find()
            .order_by_asc(entity::rule::Column::Category)
            .order_by_asc(entity::rule::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rule::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Rule>, DbErr> {
        let entity = entity::prelude::Rule::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Rule::from_entity))
    }

    pub async fn create(&self, params: CreateRuleParams) -> Result<Rule, DbErr> {
        let now = Utc::now();
        let entity = entity::rule::ActiveModel {
            category: ActiveValue::Set(params.category),
            content: ActiveValue::Set(params.content),
            position: ActiveValue::Set(params.position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rule::from_entity(entity))
    }

    /// Updates a rule's category, content, and position.
    ///
    /// # Returns
    /// - `Ok(Some(Rule))` - Updated rule
    /// - `Ok(None)` - No rule with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateRuleParams) -> Result<Option<Rule>, DbErr> {
        let Some(existing) = entity::prelude::Rule::find_by_id(params.id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::rule::ActiveModel = existing.into();
        active_model.category = ActiveValue::Set(params.category);
        active_model.content = ActiveValue::Set(params.content);
        active_model.position = ActiveValue::Set(params.position);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Rule::from_entity(entity)))
    }

    /// Deletes a rule, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Rule::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
