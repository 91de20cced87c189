use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RuleDto {
    pub id: i32,
    pub category: String,
    pub content: String,
    pub position: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateRuleDto {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub position: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateRuleDto {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub position: i32,
}
