use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct StoreItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price_cents: i32,
    pub available: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateStoreItemDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price_cents: i32,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateStoreItemDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price_cents: i32,
    #[serde(default)]
    pub available: bool,
}
