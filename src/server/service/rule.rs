use sea_orm::DatabaseConnection;

use crate::server::{
    data::rule::RuleRepository,
    error::{validation::ValidationError, AppError},
    model::rule::{CreateRuleParams, Rule, UpdateRuleParams},
};

pub struct RuleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RuleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Rule>, AppError> {
        let repo = RuleRepository::new(self.db);
        let rules = repo.get_all_ordered().await?;
        Ok(rules)
    }

    pub async fn create(&self, params: CreateRuleParams) -> Result<Rule, AppError> {
        validate_rule(&params.category, &params.content)?;

        let repo = RuleRepository::new(self.db);
        let rule = repo.create(params).await?;
        Ok(rule)
    }

    pub async fn update(&self, params: UpdateRuleParams) -> Result<Option<Rule>, AppError> {
        validate_rule(&params.category, &params.content)?;

        let repo = RuleRepository::new(self.db);
        let rule = repo.update(params).await?;
        Ok(rule)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = RuleRepository::new(self.db);
        let deleted = repo.delete(id).await?;
        Ok(deleted)
    }
}

fn validate_rule(category: &str, content: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::MissingField("category"));
    }
    if content.is_empty() {
        return Err(ValidationError::MissingField("content"));
    }
    Ok(())
}
